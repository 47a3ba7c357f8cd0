use leptos::prelude::*;

static SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("https://github.com/sppirana", "GitHub", "devicon-github-plain"),
    (
        "https://linkedin.com/in/piranavan-sivanesan",
        "LinkedIn",
        "devicon-linkedin-plain",
    ),
    ("mailto:sppirana007@gmail.com", "Email", "extra-email"),
];

static QUICK_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#contact", "Contact"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-12">
            <div class="container mx-auto px-4">
                <div class="flex flex-col items-center space-y-6">
                    <div class="text-center">
                        <h3 class="text-2xl font-bold font-heading mb-2">"Piranavan Sivanesan"</h3>
                        <p class="text-gray-400">"Software Engineer | Full-Stack Developer"</p>
                    </div>
                    <div class="flex space-x-6">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(href, label, icon)| {
                                view! {
                                    <a
                                        href=*href
                                        target=href.starts_with("http").then_some("_blank")
                                        rel=href.starts_with("http").then_some("noopener noreferrer")
                                        aria-label=*label
                                        class="text-gray-400 hover:text-white text-2xl transition-colors duration-200"
                                    >
                                        <i class=*icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="w-full max-w-md h-px bg-gray-700"></div>
                    <div class="text-center space-y-2">
                        <p class="text-gray-400 text-sm">
                            "Built with ❤ using Rust, Leptos & Tailwind CSS"
                        </p>
                        <p class="text-gray-500 text-sm">
                            {format!(
                                "© {} Piranavan Sivanesan. All rights reserved.",
                                env!("BUILD_YEAR"),
                            )}
                        </p>
                    </div>
                    <div class="flex flex-wrap justify-center gap-4 text-sm text-gray-400">
                        {QUICK_LINKS
                            .iter()
                            .enumerate()
                            .map(|(i, (href, label))| {
                                view! {
                                    {(i > 0).then_some(view! { <span>"•"</span> })}
                                    <a href=*href class="hover:text-white transition-colors">
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
