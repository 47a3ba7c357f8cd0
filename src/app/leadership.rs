use leptos::prelude::*;

use super::reveal::Reveal;

static RESPONSIBILITIES: [(&str, &str, &str); 4] = [
    (
        "📅",
        "Event Coordination",
        "Organized and coordinated student activities, meetings, and events",
    ),
    (
        "🤝",
        "Team Collaboration",
        "Enhanced teamwork and communication skills through collaborative leadership",
    ),
    (
        "📣",
        "Student Representation",
        "Represented over 40 students, advocating for their needs and concerns",
    ),
    (
        "👥",
        "Community Building",
        "Fostered a strong sense of community among university students",
    ),
];

static LEADERSHIP_SKILLS: [&str; 8] = [
    "Communication",
    "Team Management",
    "Event Planning",
    "Problem Solving",
    "Public Speaking",
    "Decision Making",
    "Conflict Resolution",
    "Time Management",
];

#[component]
pub fn Leadership() -> impl IntoView {
    view! {
        <section id="leadership" class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold font-heading mb-4">
                            "Leadership " <span class="text-gradient">"& Experience"</span>
                        </h2>
                        <div class="w-24 h-1 bg-gradient-to-r from-primary-600 to-secondary-600 mx-auto rounded-full mb-4"></div>
                        <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                            "My leadership journey and community contributions"
                        </p>
                    </div>
                    <div class="max-w-5xl mx-auto mb-12">
                        <div class="glass-effect rounded-2xl p-8 md:p-10">
                            <div class="text-center mb-8">
                                <div class="inline-flex w-20 h-20 bg-gradient-to-br from-primary-500 to-secondary-500 rounded-2xl items-center justify-center mb-4 shadow-lg text-4xl">
                                    "👥"
                                </div>
                                <h3 class="text-3xl font-bold font-heading text-gray-900 mb-2">
                                    "Secretary"
                                </h3>
                                <p class="text-xl text-primary-600 font-semibold mb-2">
                                    "UKelanganmadam Maha Viddyalayam University Students' Union"
                                </p>
                                <p class="text-gray-600">
                                    "Leading and coordinating activities for 40+ university students"
                                </p>
                            </div>
                            <div class="grid md:grid-cols-2 gap-6">
                                {RESPONSIBILITIES
                                    .iter()
                                    .map(|(icon, title, description)| {
                                        view! {
                                            <div class="bg-white/70 backdrop-blur-sm rounded-xl p-6 border border-white/20 hover:shadow-lg transition-all">
                                                <div class="text-3xl mb-3">{*icon}</div>
                                                <h4 class="font-bold text-gray-900 text-lg mb-2">{*title}</h4>
                                                <p class="text-gray-600 text-sm">{*description}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <div class="max-w-5xl mx-auto">
                        <div class="bg-gradient-to-r from-primary-50 to-secondary-50 rounded-xl p-8 border border-primary-100">
                            <h4 class="text-2xl font-bold font-heading text-gray-900 mb-6 text-center">
                                "Skills Developed Through Leadership"
                            </h4>
                            <div class="grid sm:grid-cols-2 md:grid-cols-4 gap-4">
                                {LEADERSHIP_SKILLS
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <div class="bg-white rounded-lg px-4 py-3 text-center shadow-sm border border-gray-100">
                                                <span class="text-gray-800 font-medium">{*skill}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
