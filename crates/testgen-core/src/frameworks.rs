//! Catalog of test frameworks TestGen can target.

use serde::Serialize;

/// A test framework advertised to users, with its install steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestFramework {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub languages: &'static [&'static str],
    pub setup: &'static [&'static str],
}

pub const SUPPORTED_FRAMEWORKS: &[TestFramework] = &[
    TestFramework {
        id: "jest-rtl",
        name: "Jest + React Testing Library",
        description: "Unit and integration testing for React components",
        languages: &["JavaScript", "TypeScript"],
        setup: &[
            "npm install --save-dev jest @testing-library/react @testing-library/jest-dom",
        ],
    },
    TestFramework {
        id: "jest-msw",
        name: "Jest + MSW",
        description: "API testing with mock service workers",
        languages: &["JavaScript", "TypeScript"],
        setup: &["npm install --save-dev jest msw"],
    },
    TestFramework {
        id: "playwright",
        name: "Playwright",
        description: "End-to-end testing across all browsers",
        languages: &["JavaScript", "TypeScript"],
        setup: &["npm install --save-dev @playwright/test"],
    },
    TestFramework {
        id: "pytest",
        name: "PyTest",
        description: "Python testing framework",
        languages: &["Python"],
        setup: &["pip install pytest pytest-mock requests-mock"],
    },
    TestFramework {
        id: "junit",
        name: "JUnit",
        description: "Java unit testing framework",
        languages: &["Java"],
        setup: &["Add JUnit 5 dependency to pom.xml or build.gradle"],
    },
    TestFramework {
        id: "go-test",
        name: "Go Testing",
        description: "Built-in Go testing package",
        languages: &["Go"],
        setup: &["No additional setup required - uses built-in testing package"],
    },
];

pub fn find_framework(id: &str) -> Option<&'static TestFramework> {
    SUPPORTED_FRAMEWORKS.iter().find(|fw| fw.id == id)
}

/// Frameworks that list `language` among their supported languages.
pub fn frameworks_for_language(language: &str) -> Vec<&'static TestFramework> {
    SUPPORTED_FRAMEWORKS
        .iter()
        .filter(|fw| fw.languages.contains(&language))
        .collect()
}
