use crate::model::{StackArchetype, StackColor};

/// The built-in archetype table. Order matters: the matcher breaks ties in
/// favour of the earlier entry.
pub(super) fn archetypes() -> Vec<StackArchetype> {
    use StackColor::*;

    vec![
        StackArchetype::new(
            "MERN",
            "MERN Stack",
            "Popular JavaScript full-stack framework combining MongoDB, Express, React, and Node.js for building scalable web applications.",
            Blue,
            &["react", "express", "mongodb", "nodejs"],
        ),
        StackArchetype::new(
            "T3",
            "T3 Stack",
            "A type-safe, modular application stack featuring Next.js, TypeScript, Tailwind CSS, and Prisma.",
            Purple,
            &["nextjs", "typescript", "tailwind", "prisma"],
        ),
        StackArchetype::new(
            "JAMstack",
            "JAMstack",
            "Modern web architecture using JavaScript, APIs, and Markup for better performance and developer experience.",
            Pink,
            &["react", "nextjs", "supabase", "typescript"],
        ),
        StackArchetype::new(
            "serverless",
            "Serverless Stack",
            "Cloud-native architecture focusing on managed services and serverless computing.",
            Orange,
            &["nextjs", "firebase", "reactquery", "tailwind"],
        ),
        StackArchetype::new(
            "modernFrontend",
            "Modern Frontend",
            "Cutting-edge frontend development stack for building responsive, interactive web applications.",
            Green,
            &["react", "typescript", "tailwind", "reactquery"],
        ),
        StackArchetype::new(
            "vueStack",
            "Vue Ecosystem",
            "Progressive JavaScript framework ecosystem combining Vue with modern backends for flexible web development.",
            Green,
            &["vue", "typescript", "mongodb", "express"],
        ),
        StackArchetype::new(
            "pythonWeb",
            "Python Web Stack",
            "Robust Python-based stack for building web applications with excellent database integration.",
            Blue,
            &["django", "python", "postgres", "redis"],
        ),
        StackArchetype::new(
            "cloudNative",
            "Cloud Native Stack",
            "Modern architecture designed for deployment in cloud environments with excellent scalability.",
            Blue,
            &["docker", "kubernetes", "go", "aws"],
        ),
        StackArchetype::new(
            "mobileFirst",
            "Mobile-First Stack",
            "Cross-platform mobile development environment with cloud backend services.",
            Orange,
            &["reactnative", "typescript", "firebase", "redux"],
        ),
        StackArchetype::new(
            "enterpriseJava",
            "Enterprise Java Stack",
            "Robust and battle-tested stack for building enterprise-grade applications.",
            Purple,
            &["spring", "mysql", "aws", "docker"],
        ),
    ]
}
