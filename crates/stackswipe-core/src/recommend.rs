//! Rule-based personalized recommendations.
//!
//! Three tiers run in order over the liked set:
//!
//! 1. **Category gaps**: the liked set covers one side of a natural pairing
//!    (backend without frontend, cloud without devops, ...). Each gap group
//!    contributes at most one recommendation: its first matching sub-case,
//!    or the group's generic suggestion.
//! 2. **Pairwise gaps**: only when tier 1 produced nothing. Independent
//!    "has X but not Y" checks, all of which may fire.
//! 3. **Archetype defaults**: only when still empty. Three fixed suggestions
//!    for the best-matching archetype, or a generic set.
//!
//! The result is truncated to [`MAX_RECOMMENDATIONS`].

use std::collections::{BTreeSet, HashSet};

use crate::catalog::Catalog;
use crate::matcher::best_stack;
use crate::model::{Category, Recommendation, RecommendationKind};

use RecommendationKind::{Learning, Synergy, Upgrade};

pub const MAX_RECOMMENDATIONS: usize = 3;

/// Produce up to three recommendations for a liked set. Pure and deterministic.
pub fn recommendations<S: AsRef<str>>(catalog: &Catalog, liked: &[S]) -> Vec<Recommendation> {
    let profile = Liked::new(catalog, liked);

    let mut recs = category_gaps(&profile);
    if recs.is_empty() {
        recs = pairwise_gaps(&profile);
    }
    if recs.is_empty() {
        let stack = best_stack(catalog, liked);
        tracing::debug!(stack, "no gap rules fired, using archetype defaults");
        recs = archetype_defaults(stack);
    }

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}

/// The liked ids plus the categories they resolve to.
struct Liked {
    ids: HashSet<String>,
    categories: BTreeSet<Category>,
}

impl Liked {
    fn new<S: AsRef<str>>(catalog: &Catalog, liked: &[S]) -> Self {
        Self {
            ids: liked.iter().map(|s| s.as_ref().to_string()).collect(),
            categories: catalog.categories_of(liked),
        }
    }

    fn has(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    fn has_any(&self, ids: &[&str]) -> bool {
        ids.iter().any(|id| self.has(id))
    }

    fn has_none(&self, ids: &[&str]) -> bool {
        !self.has_any(ids)
    }

    fn covers(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

/// A canned recommendation in static form.
struct Suggestion {
    kind: RecommendationKind,
    title: &'static str,
    description: &'static str,
    related: &'static [&'static str],
}

impl Suggestion {
    fn to_recommendation(&self) -> Recommendation {
        Recommendation::new(self.kind, self.title, self.description, self.related)
    }
}

type Predicate = fn(&Liked) -> bool;

// -- Tier 1: category gaps --

struct GapGroup {
    gap: Predicate,
    cases: &'static [(Predicate, Suggestion)],
    otherwise: Option<Suggestion>,
}

static GAP_GROUPS: &[GapGroup] = &[
    // Backend without frontend
    GapGroup {
        gap: |l| l.covers(Category::Backend) && !l.covers(Category::Frontend),
        cases: &[
            (
                |l| l.has_any(&["nodejs", "express"]),
                Suggestion {
                    kind: Synergy,
                    title: "Complete Your Node.js Stack with React",
                    description: "React pairs perfectly with your Node.js backend to create a full JavaScript stack. Build dynamic UIs that connect seamlessly to your Express APIs.",
                    related: &["react", "nodejs"],
                },
            ),
            (
                |l| l.has_any(&["python", "django", "flask"]),
                Suggestion {
                    kind: Synergy,
                    title: "Add Vue.js to Your Python Backend",
                    description: "Vue.js works great with Python backends like Django or Flask. Its gentle learning curve complements Python's readability for a cohesive development experience.",
                    related: &["vue", "python"],
                },
            ),
            (
                |l| l.has("spring"),
                Suggestion {
                    kind: Synergy,
                    title: "Pair Angular with Your Spring Backend",
                    description: "Angular's strongly-typed structure pairs well with Java Spring applications. Both follow similar architectural principles for enterprise-grade applications.",
                    related: &["angular", "spring"],
                },
            ),
        ],
        otherwise: Some(Suggestion {
            kind: Synergy,
            title: "Add a Frontend to Your Backend",
            description: "Complete your application by adding a modern frontend framework like React or Vue to create interactive user interfaces for your backend services.",
            related: &["react", "vue"],
        }),
    },
    // Frontend without backend
    GapGroup {
        gap: |l| l.covers(Category::Frontend) && !l.covers(Category::Backend),
        cases: &[
            (
                |l| l.has_any(&["react", "nextjs"]),
                Suggestion {
                    kind: Synergy,
                    title: "Power Your React UI with Node.js",
                    description: "Node.js and Express create the perfect backend for your React applications. Share JavaScript across your entire stack for seamless development.",
                    related: &["nodejs", "express"],
                },
            ),
            (
                |l| l.has("vue"),
                Suggestion {
                    kind: Synergy,
                    title: "Connect Vue with Express or Flask",
                    description: "Your Vue frontend pairs excellently with either Express (JavaScript) or Flask (Python) backends, offering flexibility in your backend language choice.",
                    related: &["express", "flask"],
                },
            ),
            (
                |l| l.has("angular"),
                Suggestion {
                    kind: Synergy,
                    title: "Complete Your Angular App with Spring",
                    description: "Spring Boot provides a robust, enterprise-ready backend that complements Angular's structured approach to frontend development.",
                    related: &["spring", "nodejs"],
                },
            ),
        ],
        otherwise: Some(Suggestion {
            kind: Synergy,
            title: "Add a Backend to Your Frontend",
            description: "Complete your application by adding a backend like Node.js or Python to handle data processing, authentication, and business logic.",
            related: &["nodejs", "python"],
        }),
    },
    // Database with neither backend nor frontend
    GapGroup {
        gap: |l| {
            l.covers(Category::Database)
                && !l.covers(Category::Backend)
                && !l.covers(Category::Frontend)
        },
        cases: &[
            (
                |l| l.has("mongodb"),
                Suggestion {
                    kind: Synergy,
                    title: "Build a MERN Stack Application",
                    description: "Your MongoDB knowledge pairs perfectly with Express, React, and Node.js to create a full JavaScript stack application.",
                    related: &["express", "react", "nodejs"],
                },
            ),
            (
                |l| l.has_any(&["postgres", "mysql"]),
                Suggestion {
                    kind: Synergy,
                    title: "Create Full-Stack Apps with Your SQL Database",
                    description: "Build complete applications by adding Node.js or Django backends and React frontends to your SQL database knowledge.",
                    related: &["nodejs", "react", "django"],
                },
            ),
        ],
        otherwise: None,
    },
    // Cloud without devops
    GapGroup {
        gap: |l| l.covers(Category::Cloud) && !l.covers(Category::Devops),
        cases: &[(
            |l| l.has("aws"),
            Suggestion {
                kind: Synergy,
                title: "Master AWS Infrastructure as Code",
                description: "Elevate your AWS deployments with Terraform or AWS CDK to automate and version your infrastructure setup.",
                related: &["aws", "docker"],
            },
        )],
        otherwise: Some(Suggestion {
            kind: Upgrade,
            title: "Enhance Your Cloud Skills with DevOps",
            description: "Take your cloud deployment to the next level by adding containerization with Docker and orchestration with Kubernetes.",
            related: &["docker", "kubernetes"],
        }),
    },
    // Devops without cloud
    GapGroup {
        gap: |l| l.covers(Category::Devops) && !l.covers(Category::Cloud),
        cases: &[],
        otherwise: Some(Suggestion {
            kind: Synergy,
            title: "Deploy Your Containers to the Cloud",
            description: "Put your Docker and Kubernetes knowledge to work by deploying to AWS, GCP, or Azure for scalable, managed infrastructure.",
            related: &["aws", "gcp", "azure"],
        }),
    },
    // Languages with neither frontend nor backend
    GapGroup {
        gap: |l| {
            l.covers(Category::Language)
                && !l.covers(Category::Frontend)
                && !l.covers(Category::Backend)
        },
        cases: &[
            (
                |l| l.has_any(&["javascript", "typescript"]),
                Suggestion {
                    kind: Synergy,
                    title: "Build Applications with JavaScript",
                    description: "Apply your JavaScript/TypeScript knowledge by learning React for frontend and Node.js for backend development.",
                    related: &["react", "nodejs"],
                },
            ),
            (
                |l| l.has("python"),
                Suggestion {
                    kind: Synergy,
                    title: "Create Web Applications with Python",
                    description: "Turn your Python skills into web applications by learning Django or Flask frameworks and connecting them to modern frontends.",
                    related: &["django", "flask"],
                },
            ),
        ],
        otherwise: None,
    },
];

fn category_gaps(liked: &Liked) -> Vec<Recommendation> {
    GAP_GROUPS
        .iter()
        .filter(|group| (group.gap)(liked))
        .filter_map(|group| {
            group
                .cases
                .iter()
                .find(|(applies, _)| applies(liked))
                .map(|(_, suggestion)| suggestion)
                .or(group.otherwise.as_ref())
        })
        .inspect(|s| tracing::debug!(rule = s.title, "category gap rule fired"))
        .map(Suggestion::to_recommendation)
        .collect()
}

// -- Tier 2: pairwise gaps --

const WEB_FRONTENDS: &[&str] = &["react", "vue", "angular"];
const CLOUD_PLATFORMS: &[&str] = &["aws", "gcp", "azure"];
const MOBILE_TECHS: &[&str] = &["reactnative", "flutter", "swift", "kotlin"];

static PAIRWISE_RULES: &[(Predicate, Suggestion)] = &[
    (
        |l| l.has("javascript") && !l.has("typescript"),
        Suggestion {
            kind: Upgrade,
            title: "Level Up with TypeScript",
            description: "You already know JavaScript. TypeScript adds static typing that can catch errors early and improve your code quality.",
            related: &["typescript", "javascript"],
        },
    ),
    (
        |l| l.has("react") && !l.has("reactquery"),
        Suggestion {
            kind: Synergy,
            title: "Enhance React with React Query",
            description: "React Query would pair perfectly with your React knowledge for more efficient data fetching and state management.",
            related: &["react", "reactquery"],
        },
    ),
    (
        |l| l.has("react") && l.has_none(&["tailwind", "styledcomponents"]),
        Suggestion {
            kind: Synergy,
            title: "Style Your React Apps",
            description: "Consider adding Tailwind CSS to your React projects for rapid UI development with a utility-first approach.",
            related: &["react", "tailwind"],
        },
    ),
    (
        |l| l.has("nodejs") && !l.has("express"),
        Suggestion {
            kind: Synergy,
            title: "Add Express to your Node.js",
            description: "Express.js is a natural companion to Node.js for building robust APIs and web applications.",
            related: &["nodejs", "express"],
        },
    ),
    (
        |l| l.has_any(&["nodejs", "express"]) && l.has_none(&["mongodb", "postgres"]),
        Suggestion {
            kind: Learning,
            title: "Add a Database to Your Stack",
            description: "Your backend skills would be complemented by learning MongoDB for document storage or PostgreSQL for relational data.",
            related: &["mongodb", "postgres"],
        },
    ),
    (
        |l| l.has("javascript") && l.has_none(&["react", "vue", "angular", "svelte"]),
        Suggestion {
            kind: Learning,
            title: "Explore Frontend Frameworks",
            description: "With your JavaScript knowledge, learning React or Vue would be a great next step for building interactive UIs.",
            related: &["react", "vue"],
        },
    ),
    (
        |l| l.has_any(WEB_FRONTENDS) && l.has_none(&["nodejs", "express"]),
        Suggestion {
            kind: Learning,
            title: "Complete Your Full-Stack Journey",
            description: "Add backend skills to your frontend knowledge by learning Node.js and Express to build complete applications.",
            related: &["nodejs", "express"],
        },
    ),
    (
        |l| {
            l.has_any(&["nodejs", "express", "react", "nextjs"])
                && l.has_none(&["aws", "vercel", "gcp", "azure"])
        },
        Suggestion {
            kind: Upgrade,
            title: "Deploy to the Cloud",
            description: "Take your applications to production by learning a cloud platform like Vercel or AWS.",
            related: &["vercel", "aws"],
        },
    ),
    (
        |l| l.has_any(CLOUD_PLATFORMS) && l.has_none(&["docker", "kubernetes"]),
        Suggestion {
            kind: Upgrade,
            title: "Embrace DevOps",
            description: "Enhance your cloud skills with Docker for containerization to build more scalable applications.",
            related: &["docker", "kubernetes"],
        },
    ),
    (
        |l| l.has_any(WEB_FRONTENDS) && l.has_none(&["jest", "cypress"]),
        Suggestion {
            kind: Learning,
            title: "Level Up with Testing",
            description: "Add testing to your workflow with Jest for unit tests and Cypress for end-to-end testing.",
            related: &["jest", "cypress"],
        },
    ),
    (
        |l| l.has("react") && !l.has("nextjs"),
        Suggestion {
            kind: Upgrade,
            title: "Elevate React with Next.js",
            description: "Take your React development to the next level with Next.js for server-side rendering and static site generation.",
            related: &["react", "nextjs"],
        },
    ),
    (
        |l| l.has_any(&["react", "javascript"]) && l.has_none(MOBILE_TECHS),
        Suggestion {
            kind: Learning,
            title: "Expand to Mobile Development",
            description: "Apply your web skills to mobile with React Native to build cross-platform mobile applications.",
            related: &["reactnative", "javascript"],
        },
    ),
];

fn pairwise_gaps(liked: &Liked) -> Vec<Recommendation> {
    PAIRWISE_RULES
        .iter()
        .filter(|(applies, _)| applies(liked))
        .inspect(|(_, s)| tracing::debug!(rule = s.title, "pairwise gap rule fired"))
        .map(|(_, suggestion)| suggestion.to_recommendation())
        .collect()
}

// -- Tier 3: archetype defaults --

static STACK_DEFAULTS: &[(&str, [Suggestion; 3])] = &[
    (
        "MERN",
        [
            Suggestion {
                kind: Synergy,
                title: "Add TypeScript to Your MERN Stack",
                description: "Enhance your MERN stack with TypeScript for better type safety across your entire application.",
                related: &["typescript", "react", "nodejs"],
            },
            Suggestion {
                kind: Learning,
                title: "Explore GraphQL",
                description: "Consider adding GraphQL to your stack for more efficient and flexible API queries.",
                related: &["graphql", "apollo"],
            },
            Suggestion {
                kind: Upgrade,
                title: "Containerize Your Application",
                description: "Learn Docker to package your MERN application for consistent deployment across environments.",
                related: &["docker", "kubernetes"],
            },
        ],
    ),
    (
        "T3",
        [
            Suggestion {
                kind: Synergy,
                title: "Add tRPC to Your T3 Stack",
                description: "tRPC creates end-to-end typesafe APIs with simple RPC-like syntax.",
                related: &["typescript", "nextjs"],
            },
            Suggestion {
                kind: Learning,
                title: "State Management with Zustand",
                description: "Consider Zustand for simpler state management that plays well with TypeScript.",
                related: &["typescript", "react"],
            },
            Suggestion {
                kind: Upgrade,
                title: "Deploy to Vercel",
                description: "Vercel offers seamless deployment for Next.js applications with excellent performance.",
                related: &["nextjs", "vercel"],
            },
        ],
    ),
    (
        "JAMstack",
        [
            Suggestion {
                kind: Synergy,
                title: "Add a Headless CMS",
                description: "Consider integrating a headless CMS like Sanity or Contentful to manage your content.",
                related: &["nextjs", "react"],
            },
            Suggestion {
                kind: Learning,
                title: "Explore Static Site Generation",
                description: "Leverage Next.js SSG features for even better performance in your JAMstack sites.",
                related: &["nextjs", "react"],
            },
            Suggestion {
                kind: Upgrade,
                title: "Set Up a CDN",
                description: "Use a CDN service like Cloudflare to enhance the delivery of your JAMstack application.",
                related: &["nextjs", "vercel"],
            },
        ],
    ),
    (
        "serverless",
        [
            Suggestion {
                kind: Synergy,
                title: "Explore AWS Lambda Functions",
                description: "AWS Lambda integrates well with your serverless architecture for scalable backend operations.",
                related: &["aws", "nodejs"],
            },
            Suggestion {
                kind: Learning,
                title: "Add Serverless Database",
                description: "Consider DynamoDB or Firestore for database solutions that align with serverless architecture.",
                related: &["aws", "firebase"],
            },
            Suggestion {
                kind: Upgrade,
                title: "Implement Authentication",
                description: "Add Auth0 or AWS Cognito for secure authentication in your serverless applications.",
                related: &["aws", "firebase"],
            },
        ],
    ),
    (
        "modernFrontend",
        [
            Suggestion {
                kind: Synergy,
                title: "Add Animation Libraries",
                description: "Enhance user experience with Framer Motion or GSAP for smooth animations.",
                related: &["react", "tailwind"],
            },
            Suggestion {
                kind: Learning,
                title: "Implement Component Testing",
                description: "Learn Storybook to develop UI components in isolation and improve documentation.",
                related: &["react", "jest"],
            },
            Suggestion {
                kind: Upgrade,
                title: "Progressive Web App Features",
                description: "Transform your frontend into a PWA for better offline capabilities and mobile experience.",
                related: &["react", "nextjs"],
            },
        ],
    ),
    (
        "vueStack",
        [
            Suggestion {
                kind: Synergy,
                title: "Add Pinia for State Management",
                description: "Pinia offers intuitive state management designed specifically for Vue applications.",
                related: &["vue", "typescript"],
            },
            Suggestion {
                kind: Learning,
                title: "Explore Nuxt.js",
                description: "Consider Nuxt.js to add server-side rendering capabilities to your Vue applications.",
                related: &["vue", "typescript"],
            },
            Suggestion {
                kind: Upgrade,
                title: "Component Testing with Cypress",
                description: "Implement Cypress for reliable end-to-end testing of your Vue components and applications.",
                related: &["vue", "cypress"],
            },
        ],
    ),
    (
        "pythonWeb",
        [
            Suggestion {
                kind: Synergy,
                title: "Add Celery for Task Processing",
                description: "Celery provides async task processing for Python web applications handling complex operations.",
                related: &["python", "django"],
            },
            Suggestion {
                kind: Learning,
                title: "Explore FastAPI",
                description: "Consider FastAPI for high-performance APIs with automatic OpenAPI documentation.",
                related: &["python", "django"],
            },
            Suggestion {
                kind: Upgrade,
                title: "Docker Containerization",
                description: "Containerize your Python web applications for consistent deployment across environments.",
                related: &["python", "docker"],
            },
        ],
    ),
    (
        "cloudNative",
        [
            Suggestion {
                kind: Synergy,
                title: "Implement Service Mesh",
                description: "Add Istio or Linkerd to manage service-to-service communication in your cloud-native applications.",
                related: &["kubernetes", "docker"],
            },
            Suggestion {
                kind: Learning,
                title: "Explore Serverless Containers",
                description: "Consider AWS Fargate or Google Cloud Run for serverless container execution.",
                related: &["docker", "aws"],
            },
            Suggestion {
                kind: Upgrade,
                title: "Infrastructure as Code",
                description: "Implement Terraform or AWS CDK to manage your cloud infrastructure with code.",
                related: &["aws", "kubernetes"],
            },
        ],
    ),
    (
        "mobileFirst",
        [
            Suggestion {
                kind: Synergy,
                title: "Add State Management",
                description: "Enhance your mobile apps with Redux or MobX for robust state management.",
                related: &["reactnative", "flutter"],
            },
            Suggestion {
                kind: Learning,
                title: "Explore Native Modules",
                description: "Learn how to integrate native code modules for accessing device features not available in JavaScript.",
                related: &["reactnative", "swift"],
            },
            Suggestion {
                kind: Upgrade,
                title: "Implement Offline Capabilities",
                description: "Add local storage and synchronization to make your mobile apps work offline.",
                related: &["reactnative", "flutter"],
            },
        ],
    ),
];

static GENERIC_DEFAULTS: [Suggestion; 3] = [
    Suggestion {
        kind: Learning,
        title: "Explore Modern Web Technologies",
        description: "Consider learning React or Vue to build interactive user interfaces for your applications.",
        related: &["react", "vue"],
    },
    Suggestion {
        kind: Synergy,
        title: "Add TypeScript to Your Projects",
        description: "TypeScript adds static typing to JavaScript, helping catch errors early in development.",
        related: &["typescript", "javascript"],
    },
    Suggestion {
        kind: Upgrade,
        title: "Learn Cloud Deployment",
        description: "Explore cloud platforms like AWS or Vercel to deploy your applications with scalability in mind.",
        related: &["aws", "vercel"],
    },
];

/// The three fixed suggestions for an archetype, or the generic set when the
/// key has no entry.
fn archetype_defaults(stack: &str) -> Vec<Recommendation> {
    STACK_DEFAULTS
        .iter()
        .find(|(key, _)| *key == stack)
        .map(|(_, suggestions)| suggestions)
        .unwrap_or(&GENERIC_DEFAULTS)
        .iter()
        .map(Suggestion::to_recommendation)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recs(liked: &[&str]) -> Vec<Recommendation> {
        recommendations(Catalog::builtin(), liked)
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_empty_uses_mern_defaults() {
        let result = recs(&[]);
        assert_eq!(
            titles(&result),
            vec![
                "Add TypeScript to Your MERN Stack",
                "Explore GraphQL",
                "Containerize Your Application"
            ]
        );
    }

    #[test]
    fn test_node_backend_only_gets_react_pairing() {
        let result = recs(&["nodejs"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kind, RecommendationKind::Synergy);
        assert_eq!(result[0].related_techs, vec!["react", "nodejs"]);
    }

    #[test]
    fn test_python_backend_only_gets_vue_pairing() {
        let result = recs(&["django"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Add Vue.js to Your Python Backend");
    }

    #[test]
    fn test_backend_group_emits_at_most_one() {
        // Node and Python both match sub-cases; only the first is used.
        let result = recs(&["express", "flask"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Complete Your Node.js Stack with React");
    }

    #[test]
    fn test_backend_without_known_pairing_gets_generic() {
        let result = recs(&["graphql"]);
        assert_eq!(titles(&result), vec!["Add a Frontend to Your Backend"]);
    }

    #[test]
    fn test_frontend_only_react() {
        let result = recs(&["javascript", "react"]);
        assert_eq!(titles(&result), vec!["Power Your React UI with Node.js"]);
    }

    #[test]
    fn test_frontend_only_without_known_pairing() {
        let result = recs(&["svelte"]);
        assert_eq!(titles(&result), vec!["Add a Backend to Your Frontend"]);
    }

    #[test]
    fn test_database_only_mongo() {
        let result = recs(&["mongodb"]);
        assert_eq!(titles(&result), vec!["Build a MERN Stack Application"]);
    }

    #[test]
    fn test_database_only_redis_has_no_subcase() {
        // No database sub-case and no other tier-1 group; tier 2 has nothing
        // for redis either, so archetype defaults for pythonWeb apply.
        let result = recs(&["redis"]);
        assert_eq!(result[0].title, "Add Celery for Task Processing");
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_cloud_without_devops_aws() {
        let result = recs(&["aws"]);
        assert_eq!(titles(&result), vec!["Master AWS Infrastructure as Code"]);
    }

    #[test]
    fn test_cloud_without_devops_other_platform() {
        let result = recs(&["vercel"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kind, RecommendationKind::Upgrade);
        assert_eq!(result[0].related_techs, vec!["docker", "kubernetes"]);
    }

    #[test]
    fn test_devops_without_cloud() {
        let result = recs(&["docker"]);
        assert_eq!(titles(&result), vec!["Deploy Your Containers to the Cloud"]);
    }

    #[test]
    fn test_language_only() {
        assert_eq!(
            titles(&recs(&["typescript"])),
            vec!["Build Applications with JavaScript"]
        );
        assert_eq!(
            titles(&recs(&["python"])),
            vec!["Create Web Applications with Python"]
        );
    }

    #[test]
    fn test_multiple_gap_groups_accumulate() {
        // Frontend without backend, cloud without devops. The language group
        // stays quiet because a frontend is covered.
        let result = recs(&["vue", "gcp", "go"]);
        assert_eq!(
            titles(&result),
            vec![
                "Connect Vue with Express or Flask",
                "Enhance Your Cloud Skills with DevOps"
            ]
        );
    }

    #[test]
    fn test_pairwise_tier_truncates_to_three() {
        // Frontend + backend + language covered: no category gap.
        let result = recs(&["javascript", "react", "nodejs"]);
        assert_eq!(
            titles(&result),
            vec![
                "Level Up with TypeScript",
                "Enhance React with React Query",
                "Style Your React Apps"
            ]
        );
    }

    #[test]
    fn test_pairwise_tier_all_rules_fire_internally() {
        let profile = Liked::new(Catalog::builtin(), &["javascript", "react", "nodejs"]);
        let all = pairwise_gaps(&profile);
        assert!(all.len() > MAX_RECOMMENDATIONS);
        assert!(all.iter().any(|r| r.title == "Elevate React with Next.js"));
        assert!(all.iter().any(|r| r.title == "Expand to Mobile Development"));
        assert!(!all.iter().any(|r| r.title == "Complete Your Full-Stack Journey"));
    }

    #[test]
    fn test_pairwise_styled_components_suppresses_styling_rule() {
        let profile = Liked::new(
            Catalog::builtin(),
            &["react", "styledcomponents", "express", "postgres"],
        );
        let all = pairwise_gaps(&profile);
        assert!(!all.iter().any(|r| r.title == "Style Your React Apps"));
        assert!(!all.iter().any(|r| r.title == "Add a Database to Your Stack"));
    }

    #[test]
    fn test_full_mern_falls_to_pairwise() {
        let result = recs(&["react", "express", "mongodb", "nodejs"]);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].title, "Enhance React with React Query");
    }

    #[test]
    fn test_enterprise_java_uses_generic_defaults() {
        // Every gap is closed and no pairwise rule applies.
        let result = recs(&["spring", "mysql", "aws", "docker", "svelte"]);
        assert_eq!(
            titles(&result),
            vec![
                "Explore Modern Web Technologies",
                "Add TypeScript to Your Projects",
                "Learn Cloud Deployment"
            ]
        );
    }

    #[test]
    fn test_unknown_ids_behave_like_empty() {
        assert_eq!(recs(&["cobol"]), recs(&[]));
    }

    #[test]
    fn test_idempotent() {
        let liked = ["javascript", "react", "nodejs", "aws"];
        assert_eq!(recs(&liked), recs(&liked));
    }

    #[test]
    fn test_every_archetype_default_has_three() {
        for (_, suggestions) in STACK_DEFAULTS {
            assert_eq!(suggestions.len(), 3);
        }
        assert_eq!(archetype_defaults("unknownStack").len(), 3);
    }

    #[test]
    fn test_default_table_keys_exist_in_catalog() {
        for (key, _) in STACK_DEFAULTS {
            assert!(Catalog::builtin().archetype(key).is_some(), "{key}");
        }
    }
}
