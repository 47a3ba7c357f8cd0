use leptos::prelude::*;

use super::reveal::Reveal;

static COURSES: [&str; 8] = [
    "Algorithms Analysis",
    "Java Programming",
    "Database Management",
    "Python Programming",
    "Object Oriented Programming",
    "Server-Side Web Development",
    "Software Engineering Principles and Practice",
    "Software Development Group Project",
];

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="py-20 bg-gradient-to-br from-primary-50 to-secondary-50">
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold font-heading mb-4">
                            <span class="text-gradient">"Education"</span>
                        </h2>
                        <div class="w-24 h-1 bg-gradient-to-r from-primary-600 to-secondary-600 mx-auto rounded-full mb-4"></div>
                        <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                            "My academic journey in software engineering"
                        </p>
                    </div>
                    <div class="max-w-4xl mx-auto">
                        <div class="glass-effect rounded-2xl p-8 md:p-10">
                            <div class="flex flex-col md:flex-row md:items-start md:space-x-6">
                                <div class="flex-shrink-0 w-20 h-20 bg-gradient-to-br from-primary-500 to-secondary-500 rounded-2xl flex items-center justify-center mb-6 md:mb-0 shadow-lg text-4xl">
                                    "🎓"
                                </div>
                                <div class="flex-1">
                                    <h3 class="text-2xl md:text-3xl font-bold font-heading text-gray-900 mb-2">
                                        "B.Eng (Hons) in Software Engineering"
                                    </h3>
                                    <h4 class="text-xl text-primary-600 font-semibold mb-4">
                                        "Informatics Institute of Technology, Colombo"
                                    </h4>
                                    <div class="grid sm:grid-cols-2 gap-4 mb-6 text-gray-600">
                                        <div class="flex items-center space-x-2">
                                            <span class="text-primary-600">"📅"</span>
                                            <span>"September 2023 - September 2027"</span>
                                        </div>
                                        <div class="flex items-center space-x-2">
                                            <span class="text-primary-600">"📍"</span>
                                            <span>"Colombo, Sri Lanka"</span>
                                        </div>
                                    </div>
                                    <div class="mt-8">
                                        <div class="flex items-center space-x-2 mb-4">
                                            <span class="text-primary-600 text-xl">"📖"</span>
                                            <h5 class="text-xl font-bold text-gray-900">
                                                "Relevant Course Modules"
                                            </h5>
                                        </div>
                                        <div class="grid sm:grid-cols-2 gap-3">
                                            {COURSES
                                                .iter()
                                                .map(|course| {
                                                    view! {
                                                        <div class="flex items-start space-x-2 text-gray-700">
                                                            <span class="text-primary-600 mt-1">"•"</span>
                                                            <span>{*course}</span>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="mt-8 max-w-4xl mx-auto">
                        <div class="bg-white/70 backdrop-blur-sm rounded-xl p-6 border border-white/20">
                            <p class="text-center text-gray-600">
                                <span class="font-semibold text-gray-900">"Academic Focus:"</span>
                                " Building a strong foundation in software engineering principles, algorithms, and modern development practices while working on real-world projects."
                            </p>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
