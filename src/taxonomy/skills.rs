use std::collections::HashSet;
use std::sync::LazyLock;

/// Technical skill taxonomy, keyed by category code. All entries lowercase.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming_languages",
        &[
            "python",
            "javascript",
            "java",
            "c++",
            "c#",
            "c",
            "ruby",
            "go",
            "golang",
            "rust",
            "swift",
            "kotlin",
            "typescript",
            "php",
            "scala",
            "r",
            "matlab",
            "perl",
            "haskell",
            "lua",
            "dart",
            "objective-c",
            "assembly",
            "cobol",
            "fortran",
            "groovy",
            "julia",
            "elixir",
            "clojure",
            "erlang",
            "f#",
        ],
    ),
    (
        "web_frontend",
        &[
            "html",
            "html5",
            "css",
            "css3",
            "sass",
            "scss",
            "less",
            "tailwind",
            "bootstrap",
            "material-ui",
            "mui",
            "chakra-ui",
            "ant design",
            "react",
            "reactjs",
            "react.js",
            "angular",
            "angularjs",
            "vue",
            "vuejs",
            "vue.js",
            "svelte",
            "next.js",
            "nextjs",
            "nuxt.js",
            "nuxtjs",
            "gatsby",
            "remix",
            "jquery",
            "webpack",
            "vite",
            "rollup",
            "parcel",
            "babel",
            "redux",
            "mobx",
            "recoil",
            "zustand",
            "context api",
        ],
    ),
    (
        "web_backend",
        &[
            "node.js",
            "nodejs",
            "express",
            "express.js",
            "fastify",
            "nest.js",
            "nestjs",
            "koa",
            "hapi",
            "django",
            "flask",
            "fastapi",
            "tornado",
            "spring",
            "spring boot",
            "springboot",
            "hibernate",
            "struts",
            "asp.net",
            ".net",
            "dotnet",
            ".net core",
            "rails",
            "ruby on rails",
            "laravel",
            "symfony",
            "codeigniter",
            "gin",
            "echo",
            "fiber",
            "actix",
            "rocket",
            "phoenix",
            "graphql",
            "rest",
            "restful",
            "api",
            "microservices",
            "serverless",
            "grpc",
            "websocket",
            "socket.io",
        ],
    ),
    (
        "databases",
        &[
            "mysql",
            "postgresql",
            "postgres",
            "mongodb",
            "redis",
            "elasticsearch",
            "sqlite",
            "oracle",
            "sql server",
            "mssql",
            "mariadb",
            "cassandra",
            "dynamodb",
            "firebase",
            "firestore",
            "couchdb",
            "neo4j",
            "graphdb",
            "influxdb",
            "timescaledb",
            "cockroachdb",
            "supabase",
            "prisma",
            "sequelize",
            "typeorm",
            "mongoose",
            "sql",
            "nosql",
            "plsql",
        ],
    ),
    (
        "cloud_devops",
        &[
            "aws",
            "amazon web services",
            "azure",
            "microsoft azure",
            "gcp",
            "google cloud",
            "google cloud platform",
            "heroku",
            "digitalocean",
            "linode",
            "vultr",
            "cloudflare",
            "vercel",
            "netlify",
            "railway",
            "docker",
            "kubernetes",
            "k8s",
            "openshift",
            "podman",
            "containerd",
            "jenkins",
            "gitlab ci",
            "github actions",
            "circleci",
            "travis ci",
            "teamcity",
            "bamboo",
            "argo cd",
            "terraform",
            "ansible",
            "puppet",
            "chef",
            "vagrant",
            "packer",
            "helm",
            "prometheus",
            "grafana",
            "elk",
            "logstash",
            "kibana",
            "datadog",
            "new relic",
            "splunk",
            "nagios",
            "zabbix",
            "cloudwatch",
            "nginx",
            "apache",
            "load balancer",
            "cdn",
            "ci/cd",
            "cicd",
            "devops",
            "sre",
            "iaas",
            "paas",
            "saas",
            "lambda",
            "ec2",
            "s3",
            "rds",
            "eks",
            "ecs",
        ],
    ),
    (
        "ai_ml_data",
        &[
            "machine learning",
            "ml",
            "deep learning",
            "dl",
            "artificial intelligence",
            "ai",
            "neural network",
            "cnn",
            "rnn",
            "lstm",
            "transformer",
            "bert",
            "gpt",
            "llm",
            "nlp",
            "natural language processing",
            "computer vision",
            "opencv",
            "tensorflow",
            "pytorch",
            "keras",
            "scikit-learn",
            "sklearn",
            "pandas",
            "numpy",
            "scipy",
            "matplotlib",
            "seaborn",
            "plotly",
            "jupyter",
            "anaconda",
            "data analysis",
            "data science",
            "data engineering",
            "etl",
            "data pipeline",
            "spark",
            "pyspark",
            "hadoop",
            "hive",
            "pig",
            "kafka",
            "airflow",
            "mlflow",
            "kubeflow",
            "dvc",
            "weights & biases",
            "hugging face",
            "langchain",
            "openai api",
            "stable diffusion",
            "regression",
            "classification",
            "clustering",
            "reinforcement learning",
            "feature engineering",
            "model deployment",
            "mlops",
            "data visualization",
            "tableau",
            "power bi",
            "looker",
            "metabase",
            "superset",
            "dbt",
        ],
    ),
    (
        "mobile",
        &[
            "android",
            "ios",
            "react native",
            "flutter",
            "xamarin",
            "ionic",
            "cordova",
            "phonegap",
            "swiftui",
            "java android",
            "cocoa",
            "uikit",
            "android studio",
            "xcode",
            "push notifications",
            "mobile ui",
            "mobile ux",
        ],
    ),
    (
        "version_control",
        &[
            "git",
            "github",
            "gitlab",
            "bitbucket",
            "svn",
            "subversion",
            "mercurial",
            "perforce",
            "azure devops",
            "jira",
            "confluence",
            "trello",
            "asana",
            "notion",
            "slack",
            "teams",
        ],
    ),
    (
        "testing",
        &[
            "jest",
            "mocha",
            "chai",
            "jasmine",
            "cypress",
            "selenium",
            "playwright",
            "puppeteer",
            "pytest",
            "unittest",
            "junit",
            "testng",
            "rspec",
            "cucumber",
            "postman",
            "insomnia",
            "unit testing",
            "integration testing",
            "e2e testing",
            "tdd",
            "bdd",
            "qa",
            "quality assurance",
            "test automation",
            "load testing",
            "jmeter",
            "gatling",
            "locust",
            "k6",
        ],
    ),
    (
        "security",
        &[
            "cybersecurity",
            "security",
            "penetration testing",
            "ethical hacking",
            "owasp",
            "ssl",
            "tls",
            "https",
            "oauth",
            "oauth2",
            "jwt",
            "encryption",
            "authentication",
            "authorization",
            "sso",
            "ldap",
            "active directory",
            "firewall",
            "vpn",
            "ids",
            "ips",
            "siem",
            "vulnerability assessment",
            "security audit",
            "compliance",
            "gdpr",
            "hipaa",
            "pci-dss",
            "sox",
            "iso 27001",
        ],
    ),
    (
        "other_tech",
        &[
            "linux",
            "unix",
            "windows server",
            "bash",
            "shell scripting",
            "powershell",
            "vim",
            "emacs",
            "vscode",
            "intellij",
            "eclipse",
            "swagger",
            "openapi",
            "soap",
            "xml",
            "json",
            "yaml",
            "markdown",
            "latex",
            "regex",
            "cron",
            "rabbitmq",
            "celery",
            "redis queue",
            "message queue",
            "event driven",
            "blockchain",
            "solidity",
            "web3",
            "ethereum",
            "smart contracts",
            "nft",
            "iot",
            "embedded systems",
            "arduino",
            "raspberry pi",
            "agile",
            "scrum",
            "kanban",
            "waterfall",
            "sdlc",
        ],
    ),
];

/// Soft skills tracked independently of the technical taxonomy.
pub const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "critical thinking",
    "time management",
    "adaptability",
    "creativity",
    "attention to detail",
    "analytical",
    "interpersonal",
    "presentation",
    "negotiation",
    "conflict resolution",
    "decision making",
    "mentoring",
    "collaboration",
    "flexibility",
    "initiative",
    "work ethic",
    "emotional intelligence",
    "patience",
    "empathy",
    "active listening",
    "public speaking",
    "writing",
    "research",
    "project management",
    "organizational",
    "multitasking",
    "self-motivated",
    "team player",
];

/// Development tool keywords looked up during extraction.
pub const TOOL_KEYWORDS: &[&str] = &[
    "vs code",
    "visual studio",
    "pycharm",
    "webstorm",
    "android studio",
    "xcode",
    "eclipse",
    "intellij",
    "sublime",
    "atom",
    "notepad++",
    "figma",
    "sketch",
    "adobe xd",
    "photoshop",
    "illustrator",
    "jira",
    "confluence",
    "slack",
    "teams",
    "zoom",
    "notion",
    "postman",
    "insomnia",
    "charles",
    "fiddler",
    "wireshark",
];

/// Domain tags inferred from keyword-group hits.
pub const DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    ("fintech", &["fintech", "banking", "payment", "financial", "trading"]),
    ("healthcare", &["healthcare", "medical", "health", "clinical", "hospital"]),
    ("ecommerce", &["e-commerce", "ecommerce", "retail", "shopping", "marketplace"]),
    ("edtech", &["edtech", "education", "learning", "lms", "e-learning"]),
    ("gaming", &["gaming", "game development", "unity", "unreal"]),
    ("iot", &["iot", "internet of things", "embedded", "sensors"]),
    ("blockchain", &["blockchain", "crypto", "web3", "defi", "nft"]),
    ("ai", &["artificial intelligence", "machine learning", "deep learning"]),
    ("saas", &["saas", "software as a service", "b2b", "enterprise"]),
];

/// Bidirectional alias pairs: short form on the left, long form on the right.
pub const SKILL_ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("node", "node.js"),
    ("react", "reactjs"),
    ("vue", "vuejs"),
    ("angular", "angularjs"),
    ("postgres", "postgresql"),
    ("mongo", "mongodb"),
    ("k8s", "kubernetes"),
    ("tf", "tensorflow"),
    ("sklearn", "scikit-learn"),
    ("aws", "amazon web services"),
    ("gcp", "google cloud platform"),
];

/// Related technologies proposed once a skill is already held.
pub const SKILL_ADJACENCY: &[(&str, &[&str])] = &[
    ("react", &["redux", "next.js", "typescript", "jest"]),
    ("vue", &["vuex", "nuxt.js", "typescript", "jest"]),
    ("angular", &["rxjs", "typescript", "jasmine", "ngrx"]),
    ("python", &["django", "flask", "fastapi", "pytest"]),
    ("node.js", &["express", "nest.js", "typescript", "jest"]),
    ("java", &["spring boot", "hibernate", "junit", "maven"]),
    (
        "machine learning",
        &["tensorflow", "pytorch", "scikit-learn", "pandas"],
    ),
    ("docker", &["kubernetes", "ci/cd", "terraform", "aws"]),
    ("aws", &["docker", "terraform", "kubernetes", "lambda"]),
];

/// Skill bundles proposed when the target role label mentions the key.
pub const ROLE_BUNDLES: &[(&str, &[&str])] = &[
    ("frontend", &["react", "typescript", "css", "testing", "webpack"]),
    ("backend", &["node.js", "python", "sql", "docker", "api design"]),
    ("fullstack", &["react", "node.js", "sql", "docker", "aws"]),
    ("devops", &["docker", "kubernetes", "terraform", "ci/cd", "aws"]),
    (
        "data scientist",
        &["python", "machine learning", "sql", "tensorflow", "pandas"],
    ),
    ("mobile", &["react native", "flutter", "firebase", "ios", "android"]),
];

/// Flattened set of every known technical skill, for category-free lookups.
pub static ALL_TECHNICAL_SKILLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|(_, skills)| skills.iter().copied())
        .collect()
});

/// Human-readable label for a category code, e.g. `web_frontend` ->
/// `Web Frontend`.
pub fn category_label(code: &str) -> String {
    title_case(&code.replace('_', " "))
}

/// Category of a known skill, `Soft Skills` for soft skills, `Other` when
/// the skill is unknown to the taxonomy.
pub fn skill_category(skill: &str) -> String {
    let needle = skill.to_lowercase();

    for (code, skills) in SKILL_CATEGORIES {
        if skills.contains(&needle.as_str()) {
            return category_label(code);
        }
    }

    if SOFT_SKILLS.contains(&needle.as_str()) {
        return "Soft Skills".to_string();
    }

    "Other".to_string()
}

/// Capitalizes the first letter of every whitespace-separated word.
pub(crate) fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
