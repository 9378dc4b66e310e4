//! Test plan summaries and the closed set of summary kinds.

use serde::{Deserialize, Serialize};

/// Rough effort rating shown next to a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// The fixed catalog of test plan categories.
///
/// Declaration order is the order summaries are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryKind {
    ReactComponents,
    ComponentIntegration,
    ApiTests,
    UtilityTests,
    HooksTests,
    #[serde(rename = "e2e-tests")]
    E2eTests,
    PerformanceTests,
}

impl SummaryKind {
    pub const ALL: [SummaryKind; 7] = [
        SummaryKind::ReactComponents,
        SummaryKind::ComponentIntegration,
        SummaryKind::ApiTests,
        SummaryKind::UtilityTests,
        SummaryKind::HooksTests,
        SummaryKind::E2eTests,
        SummaryKind::PerformanceTests,
    ];

    /// Wire token for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            SummaryKind::ReactComponents => "react-components",
            SummaryKind::ComponentIntegration => "component-integration",
            SummaryKind::ApiTests => "api-tests",
            SummaryKind::UtilityTests => "utility-tests",
            SummaryKind::HooksTests => "hooks-tests",
            SummaryKind::E2eTests => "e2e-tests",
            SummaryKind::PerformanceTests => "performance-tests",
        }
    }

    /// Exact, case-sensitive lookup. Anything else is not a catalog id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == id)
    }

    /// Descriptive metadata attached to every summary of this kind.
    pub fn profile(self) -> SummaryProfile {
        match self {
            SummaryKind::ReactComponents => SummaryProfile {
                title: "React Component Tests",
                description: "Comprehensive tests for React components including rendering, props validation, user interactions, and accessibility",
                framework: "Jest + React Testing Library",
                complexity: Complexity::Medium,
                estimated_time: "25 min",
            },
            SummaryKind::ComponentIntegration => SummaryProfile {
                title: "Component Integration Tests",
                description: "Tests for component interactions, state management, and data flow between parent and child components",
                framework: "Jest + React Testing Library",
                complexity: Complexity::High,
                estimated_time: "40 min",
            },
            SummaryKind::ApiTests => SummaryProfile {
                title: "API Integration Tests",
                description: "Mock API calls, test error handling, data transformation, and response validation",
                framework: "Jest + MSW (Mock Service Worker)",
                complexity: Complexity::Medium,
                estimated_time: "30 min",
            },
            SummaryKind::UtilityTests => SummaryProfile {
                title: "Utility Function Tests",
                description: "Unit tests for helper functions, data validators, formatters, and pure functions",
                framework: "Jest",
                complexity: Complexity::Low,
                estimated_time: "15 min",
            },
            SummaryKind::HooksTests => SummaryProfile {
                title: "Custom Hook Tests",
                description: "Test custom React hooks with renderHook, state changes, and side effects",
                framework: "Jest + @testing-library/react-hooks",
                complexity: Complexity::Medium,
                estimated_time: "20 min",
            },
            SummaryKind::E2eTests => SummaryProfile {
                title: "End-to-End User Flow Tests",
                description: "Complete user journey testing from authentication to key feature interactions",
                framework: "Playwright",
                complexity: Complexity::High,
                estimated_time: "50 min",
            },
            SummaryKind::PerformanceTests => SummaryProfile {
                title: "Performance & Load Tests",
                description: "Component rendering performance, memory leaks, and optimization validation",
                framework: "Jest + React Testing Library + @testing-library/jest-dom",
                complexity: Complexity::High,
                estimated_time: "35 min",
            },
        }
    }
}

impl std::fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata for a summary kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub framework: &'static str,
    pub complexity: Complexity,
    pub estimated_time: &'static str,
}

/// One proposed test plan, scoped to a subset of the submitted paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPlanSummary {
    pub id: SummaryKind,
    pub title: String,
    pub description: String,
    pub framework: String,
    pub complexity: Complexity,
    pub estimated_time: String,
    pub files: Vec<String>,
}

impl TestPlanSummary {
    pub fn new(kind: SummaryKind, files: Vec<String>) -> Self {
        let profile = kind.profile();
        Self {
            id: kind,
            title: profile.title.to_string(),
            description: profile.description.to_string(),
            framework: profile.framework.to_string(),
            complexity: profile.complexity,
            estimated_time: profile.estimated_time.to_string(),
            files,
        }
    }
}
