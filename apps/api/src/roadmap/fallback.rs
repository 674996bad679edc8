//! Static roadmaps used when the LLM is not configured or its output is unusable.
//!
//! Templates are chosen by substring of the lowercased domain, checked in
//! order: `web`, `data`, `cloud` / `devops`; anything else gets the generic
//! roadmap. Domain-specific roadmaps end with the shared best-practices section.

use crate::roadmap::{Resource, RoadmapItem, RoadmapSection};

struct ItemTemplate {
    text: &'static str,
    resources: &'static [(&'static str, &'static str)],
}

struct SectionTemplate {
    title: &'static str,
    items: &'static [ItemTemplate],
}

const FUNDAMENTALS: &str = "Fundamentals to Learn";
const CORE_TOPICS: &str = "Core Technical Topics";
const TOOLS: &str = "Important Tools & Technologies";
const INTERVIEW: &str = "Interview-Focused Topics";
const BEST_PRACTICES: &str = "Best Practices & Habits";

const GENERIC_FUNDAMENTALS: SectionTemplate = SectionTemplate {
    title: FUNDAMENTALS,
    items: &[
        ItemTemplate {
            text: "Strengthen CS basics: data structures, algorithms, time & space complexity",
            resources: &[
                ("Khan Academy - Algorithms", "https://www.khanacademy.org/computing/computer-science/algorithms"),
                ("NeetCode beginner DSA playlist", "https://www.youtube.com/playlist?list=PLot-Xpze53ldVwtstag2TL4HQhAnC8ATf"),
            ],
        },
        ItemTemplate {
            text: "Understand operating systems, networks, and databases at a beginner level",
            resources: &[("CS50 Lecture Notes", "https://cs50.harvard.edu/x/2024/notes/")],
        },
        ItemTemplate {
            text: "Practice problem-solving on easy-level coding questions regularly",
            resources: &[(
                "LeetCode Explore - Top Interview Questions Easy",
                "https://leetcode.com/explore/interview/card/top-interview-questions-easy/",
            )],
        },
    ],
};

const GENERIC_INTERVIEW: SectionTemplate = SectionTemplate {
    title: INTERVIEW,
    items: &[
        ItemTemplate {
            text: "Prepare concise answers for \u{201c}Tell me about yourself\u{201d} and project explanations",
            resources: &[("Tech interview storytelling tips", "https://www.youtube.com/watch?v=w7yKx4J7P5U")],
        },
        ItemTemplate {
            text: "Practice explaining your projects, decisions, and trade-offs clearly",
            resources: &[("System design interview basics", "https://www.youtube.com/watch?v=UzLMhqg3_Wc")],
        },
        ItemTemplate {
            text: "Solve common behavioral interview questions (teamwork, conflict, ownership)",
            resources: &[("Behavioral interview prep (STAR method)", "https://www.youtube.com/watch?v=76U8A9q-pk8")],
        },
    ],
};

const SHARED_BEST_PRACTICES: SectionTemplate = SectionTemplate {
    title: BEST_PRACTICES,
    items: &[
        ItemTemplate {
            text: "Maintain a clean GitHub portfolio with 2\u{2013}3 polished projects",
            resources: &[("GitHub profile & README tips", "https://www.youtube.com/watch?v=ECuqb5Tv9qI")],
        },
        ItemTemplate {
            text: "Create a targeted resume tailored to your chosen domain",
            resources: &[("Google Resume Guide", "https://careers.google.com/how-we-hire/resume/")],
        },
        ItemTemplate {
            text: "Apply consistently and track companies, roles, and application status",
            resources: &[("Simple job tracking template", "https://docs.google.com/spreadsheets/")],
        },
    ],
};

const WEB: [SectionTemplate; 4] = [
    SectionTemplate {
        title: FUNDAMENTALS,
        items: &[
            ItemTemplate {
                text: "HTML5: semantic tags, forms, accessibility basics",
                resources: &[
                    ("MDN HTML Guide", "https://developer.mozilla.org/en-US/docs/Learn/HTML"),
                    ("HTML Crash Course", "https://www.youtube.com/watch?v=qz0aGYrrlhU"),
                ],
            },
            ItemTemplate {
                text: "CSS3: flexbox, grid, responsive design, media queries",
                resources: &[
                    ("MDN CSS Layout", "https://developer.mozilla.org/en-US/docs/Learn/CSS/CSS_layout"),
                    ("Flexbox & Grid Tutorial", "https://www.youtube.com/watch?v=1Rs2ND1ryYc"),
                ],
            },
            ItemTemplate {
                text: "JavaScript fundamentals: variables, functions, arrays, objects, DOM",
                resources: &[
                    ("MDN JS Guide", "https://developer.mozilla.org/en-US/docs/Learn/JavaScript"),
                    ("JavaScript Full Course", "https://www.youtube.com/watch?v=PkZNo7MFNFg"),
                ],
            },
        ],
    },
    SectionTemplate {
        title: CORE_TOPICS,
        items: &[
            ItemTemplate {
                text: "Modern JavaScript: ES6+, promises, async/await, modules",
                resources: &[("ES6+ Features", "https://javascript.info/first-steps")],
            },
            ItemTemplate {
                text: "One frontend framework (React preferred): components, props, state, hooks",
                resources: &[
                    ("React Official Docs", "https://react.dev/learn"),
                    ("React for Beginners", "https://www.youtube.com/watch?v=SqcY0GlETPk"),
                ],
            },
            ItemTemplate {
                text: "HTTP basics: methods, status codes, REST APIs, JSON",
                resources: &[("HTTP Overview", "https://developer.mozilla.org/en-US/docs/Web/HTTP/Overview")],
            },
        ],
    },
    SectionTemplate {
        title: TOOLS,
        items: &[
            ItemTemplate {
                text: "Git & GitHub: branching, pull requests, basic workflows",
                resources: &[
                    ("Git Handbook", "https://guides.github.com/introduction/git-handbook/"),
                    ("Git & GitHub Crash Course", "https://www.youtube.com/watch?v=RGOj5yH7evk"),
                ],
            },
            ItemTemplate {
                text: "Package managers: npm / yarn, basic scripts",
                resources: &[("npm Docs", "https://docs.npmjs.com/")],
            },
            ItemTemplate {
                text: "Build tools: CRA / Vite, basic bundling, environment variables",
                resources: &[("Vite Guide", "https://vitejs.dev/guide/")],
            },
        ],
    },
    SectionTemplate {
        title: INTERVIEW,
        items: &[
            ItemTemplate {
                text: "Implement common UI components (modals, forms, tables) from scratch",
                resources: &[("UI Component Patterns", "https://www.youtube.com/watch?v=nx1KqjYt-9k")],
            },
            ItemTemplate {
                text: "Practice coding questions involving arrays, strings, and objects in JS",
                resources: &[("LeetCode JavaScript patterns", "https://leetcode.com/tag/javascript/")],
            },
            ItemTemplate {
                text: "Be able to explain event loop, promises, and rendering flow in React",
                resources: &[("JS Event Loop Visualized", "https://www.youtube.com/watch?v=8aGhZQkoFbQ")],
            },
        ],
    },
];

const DATA: [SectionTemplate; 4] = [
    SectionTemplate {
        title: FUNDAMENTALS,
        items: &[
            ItemTemplate {
                text: "Python basics: syntax, functions, lists, dictionaries, modules",
                resources: &[
                    ("Python for Beginners", "https://www.youtube.com/watch?v=_uQrJ0TkZlc"),
                    ("Official Python Tutorial", "https://docs.python.org/3/tutorial/"),
                ],
            },
            ItemTemplate {
                text: "Math basics: statistics, probability, linear algebra essentials",
                resources: &[(
                    "Khan Academy Stats & Probability",
                    "https://www.khanacademy.org/math/statistics-probability",
                )],
            },
            ItemTemplate {
                text: "SQL: SELECT, JOIN, GROUP BY, filtering, aggregations",
                resources: &[("SQLBolt Interactive Lessons", "https://sqlbolt.com/")],
            },
        ],
    },
    SectionTemplate {
        title: CORE_TOPICS,
        items: &[
            ItemTemplate {
                text: "Pandas & NumPy for data cleaning and manipulation",
                resources: &[
                    ("Pandas Docs", "https://pandas.pydata.org/docs/"),
                    ("NumPy Docs", "https://numpy.org/doc/"),
                ],
            },
            ItemTemplate {
                text: "Data visualization: Matplotlib / Seaborn / Plotly basics",
                resources: &[("Data Viz in Python", "https://www.youtube.com/watch?v=DAQNHzOcO5A")],
            },
            ItemTemplate {
                text: "Intro to machine learning: supervised vs unsupervised, common algorithms",
                resources: &[("Hands-on ML (free chapter)", "https://github.com/ageron/handson-ml2")],
            },
        ],
    },
    SectionTemplate {
        title: TOOLS,
        items: &[
            ItemTemplate {
                text: "Jupyter Notebooks and virtual environments",
                resources: &[("Jupyter Docs", "https://docs.jupyter.org/")],
            },
            ItemTemplate {
                text: "Version control with Git & GitHub",
                resources: &[("Git & GitHub Crash Course", "https://www.youtube.com/watch?v=RGOj5yH7evk")],
            },
            ItemTemplate {
                text: "Basic cloud / deployment options for ML demos (Streamlit, Hugging Face Spaces)",
                resources: &[
                    ("Streamlit Docs", "https://docs.streamlit.io/"),
                    ("Hugging Face Spaces Guide", "https://huggingface.co/docs/hub/spaces-overview"),
                ],
            },
        ],
    },
    SectionTemplate {
        title: INTERVIEW,
        items: &[
            ItemTemplate {
                text: "Explain end-to-end data projects (problem, data, approach, evaluation)",
                resources: &[("Data science project walkthrough", "https://www.youtube.com/watch?v=XoU-tZPZH_4")],
            },
            ItemTemplate {
                text: "Practice questions on SQL and data manipulation",
                resources: &[("StrataScratch SQL questions", "https://www.stratascratch.com/")],
            },
            ItemTemplate {
                text: "Understand overfitting, cross validation, bias\u{2013}variance trade-off",
                resources: &[(
                    "Overfitting vs Underfitting",
                    "https://scikit-learn.org/stable/auto_examples/model_selection/plot_underfitting_overfitting.html",
                )],
            },
        ],
    },
];

const CLOUD: [SectionTemplate; 4] = [
    SectionTemplate {
        title: FUNDAMENTALS,
        items: &[
            ItemTemplate {
                text: "Linux basics: filesystem, permissions, common commands",
                resources: &[("Linux Journey", "https://linuxjourney.com/")],
            },
            ItemTemplate {
                text: "Networking basics: IP, DNS, HTTP, load balancing",
                resources: &[("Computer Networking Course", "https://www.youtube.com/watch?v=qiQR5rTSshw")],
            },
            ItemTemplate {
                text: "Cloud fundamentals: IaaS vs PaaS vs SaaS",
                resources: &[(
                    "AWS Cloud Practitioner Essentials",
                    "https://www.aws.training/Details/Curriculum?id=20685",
                )],
            },
        ],
    },
    SectionTemplate {
        title: CORE_TOPICS,
        items: &[
            ItemTemplate {
                text: "One cloud provider basics (AWS / Azure / GCP): compute, storage, networking",
                resources: &[("AWS Getting Started", "https://aws.amazon.com/getting-started/")],
            },
            ItemTemplate {
                text: "Containers: Docker basics, building and running images",
                resources: &[("Docker for Beginners", "https://www.youtube.com/watch?v=fqMOX6JJhGo")],
            },
            ItemTemplate {
                text: "CI/CD basics: pipelines, automated tests, deployment concepts",
                resources: &[("CI/CD for Beginners", "https://www.youtube.com/watch?v=scEDHsr3APg")],
            },
        ],
    },
    SectionTemplate {
        title: TOOLS,
        items: &[
            ItemTemplate {
                text: "Git & GitHub workflows for collaboration",
                resources: &[("Git Branching", "https://learngitbranching.js.org/")],
            },
            ItemTemplate {
                text: "Infrastructure-as-Code basics (Terraform or CloudFormation overview)",
                resources: &[("Terraform Docs", "https://developer.hashicorp.com/terraform/docs")],
            },
            ItemTemplate {
                text: "Monitoring and logging fundamentals",
                resources: &[("Observability Basics", "https://grafana.com/oss/")],
            },
        ],
    },
    SectionTemplate {
        title: INTERVIEW,
        items: &[
            ItemTemplate {
                text: "Explain how you would deploy a simple web application end to end",
                resources: &[("Deploying a Node app (example)", "https://www.youtube.com/watch?v=hn5vC0h0s8c")],
            },
            ItemTemplate {
                text: "Understand basic high-availability and scaling patterns",
                resources: &[("High Availability Basics", "https://www.youtube.com/watch?v=-W9F__D3oY4")],
            },
            ItemTemplate {
                text: "Discuss trade-offs between different deployment strategies",
                resources: &[(
                    "Blue/Green & Canary Deployments",
                    "https://martinfowler.com/bliki/BlueGreenDeployment.html",
                )],
            },
        ],
    },
];

/// Builds the deterministic roadmap for `domain`.
pub fn fallback_roadmap(domain: &str) -> Vec<RoadmapSection> {
    let d = domain.to_lowercase();

    let domain_sections: &[SectionTemplate] = if d.contains("web") {
        &WEB
    } else if d.contains("data") {
        &DATA
    } else if d.contains("cloud") || d.contains("devops") {
        &CLOUD
    } else {
        return [GENERIC_FUNDAMENTALS, GENERIC_INTERVIEW, SHARED_BEST_PRACTICES]
            .iter()
            .map(build_section)
            .collect();
    };

    domain_sections
        .iter()
        .chain(std::iter::once(&SHARED_BEST_PRACTICES))
        .map(build_section)
        .collect()
}

fn build_section(template: &SectionTemplate) -> RoadmapSection {
    RoadmapSection {
        title: template.title.to_string(),
        items: template
            .items
            .iter()
            .map(|item| RoadmapItem {
                text: item.text.to_string(),
                completed: false,
                resources: item
                    .resources
                    .iter()
                    .map(|(label, url)| Resource {
                        label: label.to_string(),
                        url: url.to_string(),
                    })
                    .collect(),
            })
            .collect(),
    }
}
