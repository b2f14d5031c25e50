use crate::model::{Category, Technology};

/// The built-in swipe catalog, in deck order.
pub(super) fn technologies() -> Vec<Technology> {
    use Category::*;

    vec![
        Technology::new(
            "react",
            "React",
            Frontend,
            "A JavaScript library for building user interfaces with a component-based architecture.",
        ),
        Technology::new(
            "nextjs",
            "Next.js",
            Frontend,
            "The React framework for production with server-side rendering and static site generation.",
        ),
        Technology::new(
            "vue",
            "Vue.js",
            Frontend,
            "Progressive JavaScript framework for building user interfaces with an incrementally adoptable architecture.",
        ),
        Technology::new(
            "angular",
            "Angular",
            Frontend,
            "Platform and framework for building single-page client applications using HTML and TypeScript.",
        ),
        Technology::new(
            "svelte",
            "Svelte",
            Frontend,
            "Radical new approach to building user interfaces that compiles your code to tiny, framework-less JavaScript.",
        ),
        Technology::new(
            "tailwind",
            "Tailwind CSS",
            Frontend,
            "A utility-first CSS framework for rapidly building custom user interfaces.",
        ),
        Technology::new(
            "styledcomponents",
            "Styled Components",
            Frontend,
            "Visual primitives for the component age, allowing you to use ES6 and CSS to style components.",
        ),
        Technology::new(
            "redux",
            "Redux",
            Frontend,
            "A predictable state container for JavaScript apps that helps manage application state.",
        ),
        Technology::new(
            "reactquery",
            "React Query",
            Frontend,
            "Hooks for fetching, caching and updating asynchronous data in React.",
        ),
        Technology::new(
            "nodejs",
            "Node.js",
            Backend,
            "A JavaScript runtime built on Chrome's V8 JavaScript engine for building scalable network apps.",
        ),
        Technology::new(
            "express",
            "Express",
            Backend,
            "Fast, unopinionated, minimalist web framework for Node.js to build APIs and web applications.",
        ),
        Technology::new(
            "nestjs",
            "NestJS",
            Backend,
            "Progressive Node.js framework for building server-side applications with elegant architecture.",
        ),
        Technology::new(
            "django",
            "Django",
            Backend,
            "High-level Python web framework that enables rapid development of secure and maintainable websites.",
        ),
        Technology::new(
            "flask",
            "Flask",
            Backend,
            "Micro web framework written in Python, designed to make getting started quick and easy.",
        ),
        Technology::new(
            "spring",
            "Spring Boot",
            Backend,
            "Java-based framework used to create microservice-ready production-grade applications.",
        ),
        Technology::new(
            "dotnet",
            ".NET",
            Backend,
            "Free, cross-platform, open source framework for building modern cloud-based applications.",
        ),
        Technology::new(
            "graphql",
            "GraphQL",
            Backend,
            "A query language for APIs and a runtime for executing those queries with your existing data.",
        ),
        Technology::new(
            "mongodb",
            "MongoDB",
            Database,
            "A document-oriented NoSQL database used for high volume data storage.",
        ),
        Technology::new(
            "postgres",
            "PostgreSQL",
            Database,
            "A powerful, open source object-relational database system with a strong reputation for reliability.",
        ),
        Technology::new(
            "mysql",
            "MySQL",
            Database,
            "Open-source relational database management system supporting SQL for querying and managing data.",
        ),
        Technology::new(
            "redis",
            "Redis",
            Database,
            "In-memory data structure store, used as a database, cache, and message broker.",
        ),
        Technology::new(
            "prisma",
            "Prisma",
            Tools,
            "Next-generation ORM for Node.js and TypeScript with type-safe database access.",
        ),
        Technology::new(
            "typescript",
            "TypeScript",
            Language,
            "A strongly typed programming language that builds on JavaScript with static type definitions.",
        )
        .with_pros(&["Catches type errors before runtime", "Excellent editor tooling"])
        .with_cons(&["Extra build step"]),
        Technology::new(
            "javascript",
            "JavaScript",
            Language,
            "High-level, interpreted programming language that conforms to the ECMAScript specification.",
        ),
        Technology::new(
            "python",
            "Python",
            Language,
            "Interpreted, high-level, general-purpose programming language with design focused on code readability.",
        ),
        Technology::new(
            "rust",
            "Rust",
            Language,
            "Systems programming language focused on safety, speed, and concurrency without a garbage collector.",
        )
        .with_pros(&["Memory safety without a GC", "Fearless concurrency"])
        .with_cons(&["Steep learning curve", "Slower compile times"]),
        Technology::new(
            "go",
            "Go",
            Language,
            "Statically typed, compiled programming language designed for simplicity, efficiency, and reliability.",
        ),
        Technology::new(
            "aws",
            "AWS",
            Cloud,
            "Amazon's cloud computing platform offering more than 200 fully featured services.",
        ),
        Technology::new(
            "gcp",
            "Google Cloud",
            Cloud,
            "Suite of cloud computing services that run on the same infrastructure as Google's products.",
        ),
        Technology::new(
            "azure",
            "Azure",
            Cloud,
            "Microsoft's cloud computing service for building, testing, deploying, and managing applications.",
        ),
        Technology::new(
            "vercel",
            "Vercel",
            Cloud,
            "Platform for frontend frameworks and static sites, built to integrate with your content, commerce, or database.",
        ),
        Technology::new(
            "docker",
            "Docker",
            Devops,
            "Platform for developing, shipping, and running applications in containers.",
        ),
        Technology::new(
            "kubernetes",
            "Kubernetes",
            Devops,
            "Open-source system for automating deployment, scaling, and management of containerized applications.",
        ),
        Technology::new(
            "firebase",
            "Firebase",
            Backend,
            "A platform developed by Google for creating mobile and web applications with backend as a service.",
        ),
        Technology::new(
            "supabase",
            "Supabase",
            Backend,
            "An open source Firebase alternative with PostgreSQL, authentication, storage, and more.",
        ),
        Technology::new(
            "amplify",
            "AWS Amplify",
            Backend,
            "Development platform for building secure and scalable mobile and web applications.",
        ),
        Technology::new(
            "appwrite",
            "Appwrite",
            Backend,
            "Open-source backend server that helps developers build apps quickly and securely.",
        ),
        Technology::new(
            "reactnative",
            "React Native",
            Mobile,
            "Framework for building native mobile apps using React and JavaScript.",
        ),
        Technology::new(
            "flutter",
            "Flutter",
            Mobile,
            "Google's UI toolkit for building natively compiled applications from a single codebase.",
        ),
        Technology::new(
            "swift",
            "Swift",
            Mobile,
            "Powerful and intuitive programming language for iOS, macOS, watchOS, and tvOS.",
        ),
        Technology::new(
            "kotlin",
            "Kotlin",
            Mobile,
            "Modern programming language that makes developers happier, designed for Android development.",
        ),
        Technology::new(
            "jest",
            "Jest",
            Tools,
            "Delightful JavaScript testing framework with a focus on simplicity.",
        ),
        Technology::new(
            "cypress",
            "Cypress",
            Tools,
            "End-to-end testing framework for web applications with an intuitive GUI.",
        ),
        Technology::new(
            "github",
            "GitHub",
            Tools,
            "Platform and cloud-based service for software development and version control using Git.",
        ),
        Technology::new(
            "gitlab",
            "GitLab",
            Tools,
            "Web-based DevOps lifecycle tool that provides a Git-repository manager.",
        ),
    ]
}
