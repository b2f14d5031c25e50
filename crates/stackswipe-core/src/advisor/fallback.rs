//! Canned advice bundles used when the recommendations service is
//! unreachable or returns something unusable.

use crate::model::{AiRecommendationPayload, LearningResource, ResourceKind, TechSuggestion};

use ResourceKind::{Community, Course, Documentation, Tutorial};

const MOBILE_TECHS: &[&str] = &["swift", "reactnative", "flutter", "kotlin"];
const PYTHON_TECHS: &[&str] = &["python", "django", "flask"];
const WEB_TECHS: &[&str] = &["react", "nextjs", "vue", "angular", "svelte", "tailwind"];

/// Pick the bundle for a liked set. The first matching domain wins: iOS,
/// Android, cross-platform mobile, Python, web, then the generic bundle.
pub fn fallback_payload<S: AsRef<str>>(liked: &[S]) -> AiRecommendationPayload {
    let has = |id: &str| liked.iter().any(|l| l.as_ref() == id);
    let has_any = |ids: &[&str]| ids.iter().any(|id| has(*id));

    let (domain, bundle) = if has("swift") {
        ("ios", &IOS)
    } else if has("kotlin") {
        ("android", &ANDROID)
    } else if has_any(MOBILE_TECHS) {
        ("mobile", &MOBILE)
    } else if has_any(PYTHON_TECHS) {
        ("python", &PYTHON)
    } else if has_any(WEB_TECHS) {
        ("web", &WEB)
    } else {
        ("generic", &GENERIC)
    };

    tracing::debug!(domain, "using fallback advice bundle");
    bundle.to_payload()
}

struct Entry {
    name: &'static str,
    description: &'static str,
    resources: &'static [(&'static str, &'static str, ResourceKind)],
}

impl Entry {
    fn to_suggestion(&self) -> TechSuggestion {
        TechSuggestion::new(self.name, self.description).with_resources(
            self.resources
                .iter()
                .map(|&(name, url, kind)| LearningResource::new(name, url, kind))
                .collect(),
        )
    }
}

struct Bundle {
    frontend: &'static [Entry],
    backend: &'static [Entry],
    database: &'static [Entry],
    cloud: &'static [Entry],
    project_ideas: &'static [Entry],
}

impl Bundle {
    fn to_payload(&self) -> AiRecommendationPayload {
        let convert = |entries: &[Entry]| entries.iter().map(Entry::to_suggestion).collect();
        AiRecommendationPayload {
            frontend: convert(self.frontend),
            backend: convert(self.backend),
            database: convert(self.database),
            cloud: convert(self.cloud),
            project_ideas: convert(self.project_ideas),
            raw_text: None,
        }
    }
}

/// Swift liked.
static IOS: Bundle = Bundle {
    frontend: &[
        Entry {
            name: "SwiftUI",
            description: "Modern UI framework for Swift that pairs perfectly with your iOS development, using a declarative syntax and powerful layout system for building beautiful interfaces.",
            resources: &[
                ("Apple SwiftUI Documentation", "https://developer.apple.com/documentation/swiftui/", Documentation),
                ("SwiftUI by Example (Free)", "https://www.hackingwithswift.com/quick-start/swiftui", Tutorial),
                ("Stanford CS193p (Free iOS Course)", "https://cs193p.sites.stanford.edu/", Course),
            ],
        },
        Entry {
            name: "Combine",
            description: "Reactive programming framework by Apple that integrates perfectly with Swift and SwiftUI for handling asynchronous events and data streams in your iOS applications.",
            resources: &[
                ("Apple Combine Documentation", "https://developer.apple.com/documentation/combine", Documentation),
                ("Getting Started with Combine", "https://www.raywenderlich.com/7864801-combine-getting-started", Tutorial),
                ("Combine: Asynchronous Programming with Swift (Book)", "https://www.raywenderlich.com/books/combine-asynchronous-programming-with-swift", Tutorial),
            ],
        },
    ],
    backend: &[
        Entry {
            name: "CloudKit",
            description: "Apple's native cloud storage solution designed specifically for iOS apps, offering seamless integration with Swift and the ability to sync data across devices.",
            resources: &[
                ("Apple CloudKit Documentation", "https://developer.apple.com/documentation/cloudkit/", Documentation),
                ("CloudKit Quick Start Guide", "https://developer.apple.com/library/archive/documentation/DataManagement/Conceptual/CloudKitQuickStart/Introduction/Introduction.html", Tutorial),
                ("CloudKit Tutorial (Hacking with Swift)", "https://www.hackingwithswift.com/read/33/overview", Tutorial),
            ],
        },
        Entry {
            name: "Firebase",
            description: "Mobile development platform with excellent Swift support for auth, databases, and cloud functions, widely used by professional iOS developers.",
            resources: &[
                ("Firebase iOS Documentation", "https://firebase.google.com/docs/ios/setup", Documentation),
                ("Firebase iOS Codelab", "https://firebase.google.com/codelabs/firebase-ios", Tutorial),
                ("Swift & Firebase: Build a iOS Chat App", "https://www.youtube.com/watch?v=iHpXyMIkVX0", Course),
            ],
        },
    ],
    database: &[
        Entry {
            name: "Core Data",
            description: "Apple's native persistence framework optimized for iOS that works perfectly with Swift, providing a fast, reliable database solution with object-graph management.",
            resources: &[
                ("Apple Core Data Documentation", "https://developer.apple.com/documentation/coredata", Documentation),
                ("Core Data by Tutorials (Hacking with Swift)", "https://www.hackingwithswift.com/store/core-data", Tutorial),
                ("Core Data & SwiftUI Tutorial", "https://www.youtube.com/watch?v=O1U0zId_d2I", Tutorial),
            ],
        },
        Entry {
            name: "Realm",
            description: "Mobile-first database solution with excellent Swift support, designed to be faster and more intuitive than Core Data while offering cross-platform compatibility.",
            resources: &[
                ("Realm Swift Documentation", "https://www.mongodb.com/docs/realm/sdk/swift/", Documentation),
                ("Realm Swift SDK Tutorial", "https://www.mongodb.com/docs/realm/sdk/swift/get-started/", Tutorial),
                ("Realm Crash Course (YouTube)", "https://www.youtube.com/watch?v=hC6dLLbFUJc", Tutorial),
            ],
        },
    ],
    cloud: &[
        Entry {
            name: "App Store Connect",
            description: "Essential platform for iOS developers to distribute and manage apps in the App Store, with tools for analytics, TestFlight beta testing, and app review.",
            resources: &[
                ("App Store Connect Documentation", "https://developer.apple.com/app-store-connect/", Documentation),
                ("Submitting Your App to the App Store", "https://developer.apple.com/documentation/xcode/submitting-your-app-for-review", Tutorial),
                ("TestFlight Beta Testing Guide", "https://testflight.apple.com/", Documentation),
            ],
        },
        Entry {
            name: "AWS Amplify",
            description: "Full-stack development platform with dedicated iOS SDKs that simplifies building cloud-powered Swift applications with authentication, storage, and API management.",
            resources: &[
                ("AWS Amplify iOS Documentation", "https://docs.amplify.aws/start/q/integration/ios/", Documentation),
                ("Getting Started with Amplify iOS", "https://docs.amplify.aws/lib/q/platform/ios/", Tutorial),
                ("Building iOS Applications with AWS Amplify", "https://aws.amazon.com/getting-started/hands-on/build-ios-app-amplify/", Tutorial),
            ],
        },
    ],
    project_ideas: &[
        Entry {
            name: "Health & Fitness Tracker",
            description: "Create an iOS app using Swift, SwiftUI, and HealthKit that helps users track workouts, nutrition, and health metrics with beautiful visualizations and insights.",
            resources: &[],
        },
        Entry {
            name: "AR Shopping Experience",
            description: "Build an immersive iOS shopping app with Swift, ARKit, and Core ML that lets users visualize products in their space before purchasing, with CloudKit backend for data syncing.",
            resources: &[],
        },
    ],
};

/// Kotlin liked, no Swift.
static ANDROID: Bundle = Bundle {
    frontend: &[
        Entry {
            name: "Jetpack Compose",
            description: "Modern UI toolkit for Android that pairs perfectly with Kotlin, using a declarative approach similar to SwiftUI for building beautiful, responsive interfaces.",
            resources: &[],
        },
        Entry {
            name: "Material Design Components",
            description: "Official design system for Android that works seamlessly with Kotlin and Jetpack Compose, providing ready-to-use UI components that follow Google's design guidelines.",
            resources: &[],
        },
    ],
    backend: &[
        Entry {
            name: "Firebase",
            description: "Google's mobile platform with first-class Kotlin support, providing authentication, real-time database, cloud functions and more for Android developers.",
            resources: &[],
        },
        Entry {
            name: "Ktor",
            description: "Kotlin-first web framework by JetBrains that allows you to build connected applications with the same language you use for Android development.",
            resources: &[],
        },
    ],
    database: &[
        Entry {
            name: "Room",
            description: "Android's recommended database solution that provides an abstraction layer over SQLite, with excellent Kotlin support and coroutines integration.",
            resources: &[],
        },
        Entry {
            name: "Realm",
            description: "Mobile-first database solution with great Kotlin support, offering better performance than SQLite while maintaining an intuitive, object-oriented API.",
            resources: &[],
        },
    ],
    cloud: &[
        Entry {
            name: "Google Play Console",
            description: "Essential platform for Android developers to publish and manage apps, with tools for automated testing, analytics, and distribution.",
            resources: &[],
        },
        Entry {
            name: "Google Cloud Platform",
            description: "Comprehensive cloud services with dedicated Android SDKs and Kotlin support, offering machine learning, storage, and serverless functions optimized for mobile.",
            resources: &[],
        },
    ],
    project_ideas: &[
        Entry {
            name: "Smart Home Controller",
            description: "Build an Android app with Kotlin and Jetpack Compose that integrates with smart home APIs to control devices, set up routines, and monitor energy usage with elegant UI.",
            resources: &[],
        },
        Entry {
            name: "Travel Companion",
            description: "Create a full-featured travel app with Kotlin, Material Design, and Maps API that helps users plan trips, discover local attractions, and share experiences offline-first with Room database.",
            resources: &[],
        },
    ],
};

/// Cross-platform mobile (React Native, Flutter).
static MOBILE: Bundle = Bundle {
    frontend: &[
        Entry {
            name: "Expo",
            description: "Development platform for React Native that simplifies cross-platform mobile development with pre-built components and easy deployment for both iOS and Android.",
            resources: &[],
        },
        Entry {
            name: "MobX",
            description: "Simple, scalable state management library that works perfectly with React Native for creating predictable mobile app state flows.",
            resources: &[],
        },
    ],
    backend: &[
        Entry {
            name: "Firebase",
            description: "Comprehensive backend platform designed for mobile developers with authentication, databases, storage, and cloud functions that work across iOS and Android.",
            resources: &[],
        },
        Entry {
            name: "Supabase",
            description: "Open-source Firebase alternative with modern APIs for mobile developers, offering real-time databases, authentication, and storage with excellent SDKs.",
            resources: &[],
        },
    ],
    database: &[
        Entry {
            name: "Watermelon DB",
            description: "High-performance reactive database for React Native that's optimized for offline-first mobile applications with excellent synchronization capabilities.",
            resources: &[],
        },
        Entry {
            name: "Realm",
            description: "Cross-platform mobile database that offers seamless synchronization, offline support, and high performance for modern mobile apps.",
            resources: &[],
        },
    ],
    cloud: &[
        Entry {
            name: "App Center",
            description: "Microsoft's mobile-focused DevOps service offering continuous integration, testing, distribution, and monitoring for both iOS and Android applications.",
            resources: &[],
        },
        Entry {
            name: "Vercel",
            description: "Deployment platform with excellent support for serving backend APIs to mobile apps, providing global CDN distribution and serverless functions.",
            resources: &[],
        },
    ],
    project_ideas: &[
        Entry {
            name: "Cross-Platform Social Media App",
            description: "Build a mobile social network with React Native or Flutter that focuses on shared interests, with real-time chat, media sharing, and offline support.",
            resources: &[],
        },
        Entry {
            name: "Mobile E-commerce Experience",
            description: "Create a stunning mobile shopping app with animations, AR product visualization, secure payment processing, and synchronized shopping cart across devices.",
            resources: &[],
        },
    ],
};

/// Python web and data.
static PYTHON: Bundle = Bundle {
    frontend: &[
        Entry {
            name: "Streamlit",
            description: "Python-native framework for rapidly building data apps with minimal frontend code, perfect for data scientists and Python developers creating interactive visualizations.",
            resources: &[],
        },
        Entry {
            name: "Dash",
            description: "Python framework for building analytical web applications using Plotly, ideal for creating interactive dashboards without extensive frontend knowledge.",
            resources: &[],
        },
    ],
    backend: &[
        Entry {
            name: "FastAPI",
            description: "Modern, high-performance Python web framework with automatic OpenAPI documentation, perfect for building APIs that complement Django or Flask applications.",
            resources: &[],
        },
        Entry {
            name: "Celery",
            description: "Distributed task queue system for Python that works perfectly with Django and Flask, enabling background processing and scheduled tasks in web applications.",
            resources: &[],
        },
    ],
    database: &[
        Entry {
            name: "PostgreSQL",
            description: "Powerful open-source database with excellent Python drivers and Django integration, offering advanced features like JSON storage and full-text search.",
            resources: &[],
        },
        Entry {
            name: "SQLAlchemy",
            description: "SQL toolkit and ORM for Python that integrates well with Flask and provides a more flexible alternative to Django's ORM with support for complex queries.",
            resources: &[],
        },
    ],
    cloud: &[
        Entry {
            name: "Heroku",
            description: "Cloud platform with first-class Python support and seamless deployment for Django and Flask applications, offering add-ons for databases and monitoring.",
            resources: &[],
        },
        Entry {
            name: "AWS Lambda",
            description: "Serverless compute service with Python runtime that works well for deploying Python API endpoints and background tasks without managing servers.",
            resources: &[],
        },
    ],
    project_ideas: &[
        Entry {
            name: "Data Analytics Dashboard",
            description: "Build a Python web application with Django/Flask and Plotly/D3.js that visualizes complex datasets with interactive charts, filters, and export options.",
            resources: &[],
        },
        Entry {
            name: "AI-Powered Content Manager",
            description: "Create a content management system with Python that uses machine learning for automatic tagging, content recommendations, and intelligent search functionality.",
            resources: &[],
        },
    ],
};

/// JavaScript web frontends.
static WEB: Bundle = Bundle {
    frontend: &[
        Entry {
            name: "Framer Motion",
            description: "Production-ready animation library for React that seamlessly integrates with your components for creating fluid, interactive UI animations and gestures.",
            resources: &[],
        },
        Entry {
            name: "TanStack Query",
            description: "Data-fetching library for React that simplifies server state management with automatic caching, background updates, and optimistic UI updates.",
            resources: &[],
        },
    ],
    backend: &[
        Entry {
            name: "Node.js",
            description: "JavaScript runtime used by LinkedIn, Netflix and Uber that lets you use the same language on client and server with a massive ecosystem.",
            resources: &[
                ("Node.js Documentation", "https://nodejs.org/en/docs/", Documentation),
                ("Node.js Tutorial (W3Schools)", "https://www.w3schools.com/nodejs/", Tutorial),
                ("Node.js Crash Course (Traversy Media)", "https://www.youtube.com/watch?v=fBNz5xF-Kx4", Tutorial),
            ],
        },
        Entry {
            name: "tRPC",
            description: "End-to-end typesafe API framework that pairs perfectly with React and TypeScript, enabling seamless communication between frontend and backend.",
            resources: &[],
        },
    ],
    database: &[
        Entry {
            name: "MongoDB",
            description: "Document database that works excellently with Node.js and JavaScript, offering flexible schema design and intuitive data models for web applications.",
            resources: &[
                ("MongoDB Documentation", "https://docs.mongodb.com/", Documentation),
                ("MongoDB University (Free Courses)", "https://university.mongodb.com/", Course),
                ("MongoDB Crash Course (Traversy Media)", "https://www.youtube.com/watch?v=-56x56UppqQ", Tutorial),
            ],
        },
        Entry {
            name: "Prisma",
            description: "Next-generation ORM for Node.js and TypeScript that simplifies database access with auto-generated types and a intuitive query API.",
            resources: &[],
        },
    ],
    cloud: &[
        Entry {
            name: "Vercel",
            description: "Developer-friendly platform optimized for React, Next.js and other modern web frameworks, offering global CDN, edge functions and seamless GitHub integration.",
            resources: &[
                ("Vercel Documentation", "https://vercel.com/docs", Documentation),
                ("Deploying Next.js to Vercel (Tutorial)", "https://nextjs.org/learn/basics/deploying-nextjs-app", Tutorial),
                ("Vercel Getting Started", "https://vercel.com/guides/getting-started-with-vercel", Tutorial),
            ],
        },
        Entry {
            name: "Netlify",
            description: "Complete platform for modern web projects with continuous deployment, serverless functions, and edge computing that works with any frontend framework.",
            resources: &[],
        },
    ],
    project_ideas: &[
        Entry {
            name: "Interactive Course Platform",
            description: "Build a modern web application with React/Next.js that offers interactive coding lessons, progress tracking, and community features with real-time collaboration.",
            resources: &[],
        },
        Entry {
            name: "AI-Enhanced Productivity Tool",
            description: "Create a web app that uses AI for task management, meeting summaries, and smart scheduling, with offline support and real-time synchronization between devices.",
            resources: &[],
        },
    ],
};

/// Mixed or unrecognised stacks.
static GENERIC: Bundle = Bundle {
    frontend: &[
        Entry {
            name: "React",
            description: "Industry-standard UI library used by Facebook, Instagram and Airbnb with extensive documentation and the largest job market demand.",
            resources: &[
                ("Official React Documentation", "https://react.dev/", Documentation),
                ("React - The Complete Guide (Udemy)", "https://www.udemy.com/course/react-the-complete-guide-incl-redux/", Course),
                ("Full React Tutorial (Net Ninja)", "https://www.youtube.com/playlist?list=PL4cUxeGkcC9gZD-Tvwfod2gaISzfRiP9d", Tutorial),
                ("React Reddit Community", "https://www.reddit.com/r/reactjs/", Community),
            ],
        },
        Entry {
            name: "Tailwind CSS",
            description: "Modern utility-first CSS framework used by Netflix and Shopify that makes styling intuitive while maintaining a professional look.",
            resources: &[
                ("Tailwind CSS Documentation", "https://tailwindcss.com/docs", Documentation),
                ("Tailwind CSS From Scratch (YouTube)", "https://www.youtube.com/watch?v=dFgzHOX84xQ", Tutorial),
                ("Tailwind CSS Examples", "https://tailwindcss.com/examples", Tutorial),
            ],
        },
    ],
    backend: &[
        Entry {
            name: "Node.js",
            description: "JavaScript runtime used by LinkedIn, Netflix and Uber that lets you use the same language on client and server with a massive ecosystem.",
            resources: &[
                ("Node.js Documentation", "https://nodejs.org/en/docs/", Documentation),
                ("Node.js Tutorial (W3Schools)", "https://www.w3schools.com/nodejs/", Tutorial),
                ("Node.js Crash Course (Traversy Media)", "https://www.youtube.com/watch?v=fBNz5xF-Kx4", Tutorial),
            ],
        },
        Entry {
            name: "Express",
            description: "Lightweight, beginner-friendly Node.js framework with excellent documentation and widespread industry adoption for building APIs.",
            resources: &[
                ("Express Documentation", "https://expressjs.com/", Documentation),
                ("Express.js Crash Course (Traversy Media)", "https://www.youtube.com/watch?v=L72fhGm1tfE", Tutorial),
                ("MDN Express Tutorial", "https://developer.mozilla.org/en-US/docs/Learn/Server-side/Express_Nodejs", Tutorial),
            ],
        },
    ],
    database: &[
        Entry {
            name: "MongoDB",
            description: "Modern NoSQL database used by Uber, eBay and Electronic Arts with excellent documentation and easy setup for JavaScript developers.",
            resources: &[
                ("MongoDB Documentation", "https://docs.mongodb.com/", Documentation),
                ("MongoDB University (Free Courses)", "https://university.mongodb.com/", Course),
                ("MongoDB Crash Course (Traversy Media)", "https://www.youtube.com/watch?v=-56x56UppqQ", Tutorial),
            ],
        },
        Entry {
            name: "PostgreSQL",
            description: "Powerful open-source SQL database used by Instagram and Spotify that balances ease of use with advanced features like JSON storage.",
            resources: &[
                ("PostgreSQL Documentation", "https://www.postgresql.org/docs/", Documentation),
                ("PostgreSQL Tutorial", "https://www.postgresqltutorial.com/", Tutorial),
                ("PostgreSQL Full Course for Beginners", "https://www.youtube.com/watch?v=qw--VYLpxG4", Course),
            ],
        },
    ],
    cloud: &[
        Entry {
            name: "Vercel",
            description: "Developer-friendly platform used by Airbnb and TikTok that makes deploying modern websites simple with zero configuration.",
            resources: &[
                ("Vercel Documentation", "https://vercel.com/docs", Documentation),
                ("Deploying Next.js to Vercel (Tutorial)", "https://nextjs.org/learn/basics/deploying-nextjs-app", Tutorial),
                ("Vercel Getting Started", "https://vercel.com/guides/getting-started-with-vercel", Tutorial),
            ],
        },
        Entry {
            name: "GitLab",
            description: "Complete DevOps platform that enables organizations to deliver software faster and more efficiently, with built-in CI/CD, repositories, and project management.",
            resources: &[
                ("GitLab Documentation", "https://docs.gitlab.com/", Documentation),
                ("GitLab CI/CD Reference", "https://docs.gitlab.com/ee/ci/", Documentation),
                ("GitLab Learning Resources", "https://docs.gitlab.com/ee/tutorials/", Tutorial),
                ("GitLab Community Forum", "https://forum.gitlab.com/", Community),
            ],
        },
        Entry {
            name: "Firebase",
            description: "Google's complete platform with authentication, databases and hosting that lets beginners build full-featured apps with minimal setup.",
            resources: &[
                ("Firebase Documentation", "https://firebase.google.com/docs", Documentation),
                ("Firebase Full Course (Net Ninja)", "https://www.youtube.com/playlist?list=PL4cUxeGkcC9jERUGvbudErNCeSZHWUVlb", Course),
                ("Firebase Crash Course (Traversy Media)", "https://www.youtube.com/watch?v=jCY6DH8F4oc", Tutorial),
            ],
        },
    ],
    project_ideas: &[
        Entry {
            name: "Social Media Dashboard",
            description: "Build a responsive dashboard that integrates with popular social media APIs to display statistics and schedule posts with a modern UI.",
            resources: &[],
        },
        Entry {
            name: "E-commerce Platform",
            description: "Create a full-featured online store with product catalog, shopping cart, payment processing, and user accounts using modern web tools.",
            resources: &[],
        },
    ],
};
