use leptos::prelude::*;

use super::reveal::Reveal;

struct Tech {
    name: &'static str,
    icon: &'static str,
    color: &'static str,
}

struct Project {
    name: &'static str,
    date: &'static str,
    kind: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    technologies: &'static [Tech],
    github: Option<&'static str>,
    external: Option<&'static str>,
}

static PROJECTS: [Project; 3] = [
    Project {
        name: "Farm Sync",
        date: "Jan. 2025",
        kind: "Group Project",
        description: "Smart farming decision support system for Sri Lankan farmers",
        features: &[
            "Real-time data and Machine Learning integration",
            "Next.js + Tailwind CSS frontend",
            "Labourer Dashboard for workforce management",
            "Data Dashboard with analytics",
            "ML model for vegetable price prediction",
        ],
        technologies: &[
            Tech { name: "Laravel", icon: "devicon-laravel-original", color: "text-red-600" },
            Tech { name: "Next.js", icon: "devicon-nextjs-plain", color: "text-black" },
            Tech { name: "Python", icon: "devicon-python-plain", color: "text-blue-600" },
            Tech { name: "Tailwind CSS", icon: "devicon-tailwindcss-plain", color: "text-cyan-500" },
        ],
        github: Some("#"),
        external: None,
    },
    Project {
        name: "VIA-Story Web App",
        date: "Jul. 2024",
        kind: "Individual Project",
        description: "Modern photography website with clean, responsive design",
        features: &[
            "UI/UX focused smooth browsing experience",
            "Built with Next.js and Tailwind CSS",
            "Responsive image galleries",
            "Modern animations and transitions",
            "Optimized performance",
        ],
        technologies: &[
            Tech { name: "Next.js", icon: "devicon-nextjs-plain", color: "text-black" },
            Tech { name: "Tailwind CSS", icon: "devicon-tailwindcss-plain", color: "text-cyan-500" },
        ],
        github: Some("#"),
        external: None,
    },
    Project {
        name: "Plane Seat Management System",
        date: "Oct. 2024",
        kind: "Individual Project",
        description: "Java console application for managing airplane seat bookings",
        features: &[
            "Seat booking and cancellation functionality",
            "Intelligent seat finder algorithm",
            "Interactive seat map visualization",
            "Comprehensive error handling",
            "OOP concepts for structure and scalability",
        ],
        technologies: &[
            Tech { name: "Java", icon: "devicon-java-plain", color: "text-orange-600" },
            Tech { name: "IntelliJ", icon: "devicon-intellij-plain", color: "text-purple-600" },
        ],
        github: Some("#"),
        external: None,
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 bg-gradient-to-br from-gray-50 to-primary-50">
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold font-heading mb-4">
                            "My " <span class="text-gradient">"Projects"</span>
                        </h2>
                        <div class="w-24 h-1 bg-gradient-to-r from-primary-600 to-secondary-600 mx-auto rounded-full mb-4"></div>
                        <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                            "Here are some of my recent projects that showcase my skills in full-stack development and software engineering"
                        </p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-7xl mx-auto">
                        {PROJECTS.iter().map(project_card).collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn project_card(project: &'static Project) -> impl IntoView {
    view! {
        <div class="glass-effect rounded-xl overflow-hidden group">
            <div class="p-6">
                <div class="flex items-start justify-between mb-4">
                    <div>
                        <h3 class="text-2xl font-bold font-heading text-gray-900 mb-1 group-hover:text-primary-600 transition-colors">
                            {project.name}
                        </h3>
                        <p class="text-sm text-gray-500">
                            {format!("{} • {}", project.date, project.kind)}
                        </p>
                    </div>
                    <div class="flex space-x-2">
                        {project
                            .github
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label="Repository"
                                        class="text-gray-600 hover:text-primary-600 text-2xl transition-colors"
                                    >
                                        <i class="devicon-github-plain"></i>
                                    </a>
                                }
                            })}
                        {project
                            .external
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label="Live site"
                                        class="text-gray-600 hover:text-primary-600 text-xl transition-colors"
                                    >
                                        <i class="extra-link"></i>
                                    </a>
                                }
                            })}
                    </div>
                </div>
                <p class="text-gray-700 mb-4 font-medium">{project.description}</p>
                <ul class="space-y-2 mb-6">
                    {project
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="flex items-start text-sm text-gray-600">
                                    <span class="text-primary-600 mr-2">"•"</span>
                                    <span>{*feature}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex flex-wrap gap-3">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <div class="flex items-center space-x-2 px-3 py-2 bg-white rounded-lg shadow-sm border border-gray-200">
                                    <i class=format!("{} {} text-lg", tech.icon, tech.color)></i>
                                    <span class="text-xs font-medium text-gray-700">{tech.name}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="h-1 bg-gradient-to-r from-primary-600 to-secondary-600 scale-x-0 group-hover:scale-x-100 transition-transform duration-300"></div>
        </div>
    }
}
