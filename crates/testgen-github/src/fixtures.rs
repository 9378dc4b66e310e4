//! Built-in repository data served when GitHub cannot be reached.
//!
//! Trees are picked by naive substring matching on the lower-cased
//! repository name; anything unrecognised gets the React app tree.

use crate::model::{EntryKind, FileContent, GitHubFile, GitHubRepo};

const FIXTURE_OWNER: &str = "user";

const REACT_APP_TREE: &[&str] = &[
    "src/",
    "src/components/",
    "src/components/UserProfile.tsx",
    "src/components/Button.tsx",
    "src/components/Modal.tsx",
    "src/utils/",
    "src/utils/api.ts",
    "src/utils/helpers.ts",
    "src/utils/validation.ts",
    "src/hooks/",
    "src/hooks/useAuth.ts",
    "src/hooks/useApi.ts",
    "src/App.tsx",
    "src/index.tsx",
    "package.json",
    "README.md",
];

const PYTHON_API_TREE: &[&str] = &[
    "app/",
    "app/main.py",
    "app/api/",
    "app/api/routes.py",
    "app/services/",
    "app/services/user_service.py",
    "app/utils/",
    "app/utils/helpers.py",
    "tests/",
    "tests/test_main.py",
    "requirements.txt",
    "README.md",
];

const VUE_DASHBOARD_TREE: &[&str] = &[
    "src/",
    "src/components/",
    "src/components/DashboardCard.vue",
    "src/components/UserTable.vue",
    "src/composables/",
    "src/composables/useStats.ts",
    "src/api/",
    "src/api/client.ts",
    "src/App.vue",
    "src/main.ts",
    "package.json",
];

const NODE_SERVICE_TREE: &[&str] = &[
    "src/",
    "src/index.js",
    "src/routes/",
    "src/routes/users.js",
    "src/services/",
    "src/services/userService.js",
    "src/lib/",
    "src/lib/db.js",
    "src/middleware/",
    "src/middleware/auth.js",
    "package.json",
    "Dockerfile",
];

const USER_PROFILE_SOURCE: &str = r#"import React from 'react';

interface User {
  id: number;
  name: string;
  email: string;
  avatar?: string;
}

interface UserProfileProps {
  user: User;
  onEdit?: (userId: number) => void;
}

export const UserProfile: React.FC<UserProfileProps> = ({ user, onEdit }) => {
  return (
    <div className="user-profile">
      <img src={user.avatar || '/default-avatar.png'} alt={user.name} />
      <h2>{user.name}</h2>
      <p>{user.email}</p>
      {onEdit && (
        <button onClick={() => onEdit(user.id)}>Edit Profile</button>
      )}
    </div>
  );
};"#;

/// Repositories shown to a user whose GitHub listing failed.
pub fn repositories() -> Vec<GitHubRepo> {
    let repo = |id: u64, name: &str, description: &str, language: &str, private: bool| GitHubRepo {
        id,
        name: name.to_string(),
        full_name: format!("{FIXTURE_OWNER}/{name}"),
        description: Some(description.to_string()),
        language: Some(language.to_string()),
        private,
    };
    vec![
        repo(
            1,
            "my-react-app",
            "A modern React application with TypeScript",
            "TypeScript",
            false,
        ),
        repo(2, "python-api", "REST API built with FastAPI", "Python", false),
        repo(3, "vue-dashboard", "Admin dashboard with Vue.js", "Vue", true),
        repo(
            4,
            "node-microservice",
            "Microservice architecture with Node.js",
            "JavaScript",
            false,
        ),
    ]
}

fn tree_for(repo: &str) -> &'static [&'static str] {
    let repo = repo.to_lowercase();
    if repo.contains("python") {
        PYTHON_API_TREE
    } else if repo.contains("vue") {
        VUE_DASHBOARD_TREE
    } else if repo.contains("node") || repo.contains("service") {
        NODE_SERVICE_TREE
    } else {
        REACT_APP_TREE
    }
}

fn entry(line: &str) -> GitHubFile {
    let (path, kind) = match line.strip_suffix('/') {
        Some(dir) => (dir, EntryKind::Dir),
        None => (line, EntryKind::File),
    };
    GitHubFile {
        name: path.rsplit('/').next().unwrap_or(path).to_string(),
        path: path.to_string(),
        kind,
        download_url: None,
    }
}

/// Flat listing for `repo`, restricted to entries under `dir` when given.
pub fn contents(repo: &str, dir: &str) -> Vec<GitHubFile> {
    let dir = dir.trim_matches('/');
    let prefix = format!("{dir}/");
    tree_for(repo)
        .iter()
        .map(|line| entry(line))
        .filter(|e| dir.is_empty() || e.path.starts_with(&prefix))
        .collect()
}

/// Placeholder body for `path`.
pub fn file_content(path: &str) -> FileContent {
    let content = if path.contains("UserProfile.tsx") {
        USER_PROFILE_SOURCE.to_string()
    } else {
        format!(
            "// Mock content for {path}\nexport const mockFunction = () => {{\n  return \"This is mock content for demonstration\";\n}};"
        )
    };
    FileContent {
        name: path.rsplit('/').next().unwrap_or(path).to_string(),
        path: path.to_string(),
        content,
    }
}
