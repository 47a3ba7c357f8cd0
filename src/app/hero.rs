use leptos::prelude::*;

struct SocialLink {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        href: "https://github.com/sppirana",
        label: "GitHub Profile",
        icon: "devicon-github-plain",
    },
    SocialLink {
        href: "https://linkedin.com/in/piranavan-sivanesan",
        label: "LinkedIn Profile",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        href: "mailto:sppirana007@gmail.com",
        label: "Email",
        icon: "extra-email",
    },
];

/// Full-height landing banner: name, tagline, social links, and CTAs that
/// anchor down to the projects and contact sections.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative bg-gradient-to-br from-primary-50 via-white to-secondary-50"
        >
            <div class="container mx-auto px-4 py-20">
                <div class="max-w-4xl mx-auto text-center">
                    <h1 class="text-5xl md:text-7xl font-bold font-heading mb-6">
                        "Hi, I'm " <span class="text-gradient">"Piranavan Sivanesan"</span>
                    </h1>
                    <p class="text-2xl md:text-3xl text-gray-700 mb-4 font-medium">
                        "Software Engineer | Full-Stack Developer"
                    </p>
                    <p class="text-lg text-gray-600 mb-8">"📍 Colombo 6, Sri Lanka"</p>
                    <div class="flex items-center justify-center space-x-6 mb-10">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target=link.href.starts_with("http").then_some("_blank")
                                        rel=link.href.starts_with("http").then_some("noopener noreferrer")
                                        aria-label=link.label
                                        class="text-gray-700 hover:text-primary-600 text-3xl transition-colors"
                                    >
                                        <i class=link.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <a
                            href="#projects"
                            class="px-8 py-4 bg-gradient-to-r from-primary-600 to-primary-700 text-white rounded-lg font-semibold shadow-lg hover:shadow-xl transition-all duration-300"
                        >
                            "View Projects"
                        </a>
                        <a
                            href="#contact"
                            class="px-8 py-4 bg-white text-primary-600 border-2 border-primary-600 rounded-lg font-semibold shadow-lg hover:bg-primary-50 transition-all duration-300"
                        >
                            "Contact Me"
                        </a>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 text-gray-600 text-3xl animate-bounce">
                "↓"
            </div>
        </section>
    }
}
