use leptos::prelude::*;

use super::reveal::Reveal;

static HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "Currently Studying",
        "B.Eng (Hons) in Software Engineering at IIT Colombo",
    ),
    (
        "Focus Areas",
        "Full-Stack Development, Machine Learning, UI/UX Design",
    ),
    ("Timeline", "September 2023 - September 2027"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <Reveal class="max-w-5xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold font-heading mb-4">
                            "About " <span class="text-gradient">"Me"</span>
                        </h2>
                        <div class="w-24 h-1 bg-gradient-to-r from-primary-600 to-secondary-600 mx-auto rounded-full"></div>
                    </div>
                    <div class="grid md:grid-cols-2 gap-12 items-center">
                        <div class="flex justify-center">
                            <div class="relative">
                                <div class="absolute inset-0 bg-gradient-to-r from-primary-400 to-secondary-400 rounded-full blur-xl opacity-30"></div>
                                <div class="relative w-64 h-64 md:w-80 md:h-80 rounded-full bg-gradient-to-br from-primary-100 to-secondary-100 flex items-center justify-center shadow-2xl">
                                    <div class="text-8xl">"👨‍💻"</div>
                                </div>
                            </div>
                        </div>
                        <div class="space-y-6">
                            <h3 class="text-3xl font-bold font-heading text-gray-900">
                                "Passionate Software Engineer"
                            </h3>
                            <p class="text-lg text-gray-700 leading-relaxed">
                                "Passionate undergraduate with a strong foundation in software engineering principles, eager to learn from experts in Software Engineering program and contribute meaningfully."
                            </p>
                            <div class="space-y-4">
                                {HIGHLIGHTS
                                    .iter()
                                    .map(|(title, detail)| {
                                        view! {
                                            <div class="flex items-start space-x-3">
                                                <div class="flex-shrink-0 w-2 h-2 bg-primary-600 rounded-full mt-2"></div>
                                                <div>
                                                    <h4 class="font-semibold text-gray-900">{*title}</h4>
                                                    <p class="text-gray-600">{*detail}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="pt-4">
                                <a
                                    href="#contact"
                                    class="inline-block px-6 py-3 bg-gradient-to-r from-primary-600 to-primary-700 text-white rounded-lg font-semibold shadow-lg hover:shadow-xl transition-all duration-300"
                                >
                                    "Get In Touch"
                                </a>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
