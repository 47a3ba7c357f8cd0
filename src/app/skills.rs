use leptos::prelude::*;

use super::reveal::Reveal;

struct Skill {
    name: &'static str,
    icon: &'static str,
    color: &'static str,
    level: u8,
}

struct SkillCategory {
    title: &'static str,
    skills: &'static [Skill],
}

static CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Languages",
        skills: &[
            Skill { name: "JavaScript", icon: "devicon-javascript-plain", color: "text-yellow-500", level: 85 },
            Skill { name: "Python", icon: "devicon-python-plain", color: "text-blue-600", level: 80 },
            Skill { name: "Java", icon: "devicon-java-plain", color: "text-orange-600", level: 85 },
            Skill { name: "PHP", icon: "devicon-php-plain", color: "text-indigo-600", level: 75 },
            Skill { name: "HTML/CSS", icon: "devicon-html5-plain", color: "text-orange-500", level: 90 },
            Skill { name: "SQL", icon: "devicon-mysql-plain", color: "text-blue-700", level: 80 },
        ],
    },
    SkillCategory {
        title: "Frameworks & Libraries",
        skills: &[
            Skill { name: "React.js", icon: "devicon-react-original", color: "text-cyan-500", level: 85 },
            Skill { name: "Next.js", icon: "devicon-nextjs-plain", color: "text-black", level: 80 },
            Skill { name: "Node.js", icon: "devicon-nodejs-plain", color: "text-green-600", level: 75 },
            Skill { name: "Tailwind CSS", icon: "devicon-tailwindcss-plain", color: "text-cyan-500", level: 90 },
        ],
    },
    SkillCategory {
        title: "Developer Tools",
        skills: &[
            Skill { name: "VS Code", icon: "devicon-vscode-plain", color: "text-blue-600", level: 90 },
            Skill { name: "IntelliJ IDEA", icon: "devicon-intellij-plain", color: "text-purple-600", level: 85 },
            Skill { name: "GitHub", icon: "devicon-github-plain", color: "text-gray-900", level: 85 },
            Skill { name: "Figma", icon: "devicon-figma-plain", color: "text-purple-500", level: 75 },
            Skill { name: "WordPress", icon: "devicon-wordpress-plain", color: "text-blue-600", level: 70 },
        ],
    },
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl md:text-5xl font-bold font-heading mb-4">
                            "Technical " <span class="text-gradient">"Skills"</span>
                        </h2>
                        <div class="w-24 h-1 bg-gradient-to-r from-primary-600 to-secondary-600 mx-auto rounded-full mb-4"></div>
                        <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                            "Technologies and tools I work with to bring ideas to life"
                        </p>
                    </div>
                    <div class="max-w-6xl mx-auto space-y-12">
                        {CATEGORIES
                            .iter()
                            .map(|category| {
                                view! {
                                    <div class="space-y-6">
                                        <h3 class="text-2xl font-bold font-heading text-gray-900 mb-6">
                                            {category.title}
                                        </h3>
                                        <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                                            {category
                                                .skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <div class="glass-effect rounded-xl p-6 group cursor-pointer">
                                                            <div class="flex items-center justify-between mb-4">
                                                                <div class="flex items-center space-x-3">
                                                                    <i class=format!(
                                                                        "{} {} text-3xl group-hover:scale-110 transition-transform",
                                                                        skill.icon,
                                                                        skill.color,
                                                                    )></i>
                                                                    <span class="font-semibold text-gray-900">
                                                                        {skill.name}
                                                                    </span>
                                                                </div>
                                                                <span class="text-sm font-medium text-primary-600">
                                                                    {format!("{}%", skill.level)}
                                                                </span>
                                                            </div>
                                                            <div class="w-full bg-gray-200 rounded-full h-2 overflow-hidden">
                                                                <div
                                                                    class="h-full bg-gradient-to-r from-primary-600 to-secondary-600 rounded-full transition-all duration-1000"
                                                                    style:width=format!("{}%", skill.level)
                                                                ></div>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="mt-16 text-center">
                        <div class="glass-effect rounded-xl p-8 max-w-3xl mx-auto">
                            <h4 class="text-xl font-bold text-gray-900 mb-3">"Continuous Learning"</h4>
                            <p class="text-gray-600">
                                "I'm always eager to learn new technologies and improve my skills. Currently exploring advanced React patterns, cloud services, and DevOps practices."
                            </p>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
