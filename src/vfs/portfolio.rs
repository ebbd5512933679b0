//! Built-in portfolio content
//!
//! The default tree served when no content file is configured.

use serde_json::json;

use super::node::{Node, NodeTree};
use crate::error::TreeError;

/// Sample portfolio with `projects`, `skills` and `contact` sections
pub fn sample_tree() -> Result<NodeTree, TreeError> {
    NodeTree::new(Node::directory(
        "",
        vec![projects(), skills(), contact()],
    ))
}

fn projects() -> Node {
    Node::directory(
        "projects",
        vec![
            Node::file(
                "epicwars-cvc",
                json!({
                    "title": "EpicWars CvC",
                    "body": [
                        { "type": "text", "value": "Card-versus-card battler with deterministic turn resolution." },
                        { "type": "link", "label": "Play it", "href": "https://epicwars.example.com" },
                        { "type": "tags", "value": ["rust", "wasm", "websockets"] }
                    ]
                }),
            )
            .with_description("Multiplayer card battler")
            .with_preview("Real-time card game with a deterministic rules engine")
            .with_link("https://epicwars.example.com"),
            Node::file(
                "pixel-forge",
                "Pixel Forge\n\nA sprite editor with layered undo history and palette import.",
            )
            .with_description("Sprite editor")
            .with_preview("Layered pixel-art editor")
            .with_link("https://github.com/example/pixel-forge"),
            Node::file(
                "terminal-folio",
                "This very terminal: a virtual filesystem you can cd around in.",
            )
            .with_description("Interactive portfolio shell")
            .with_preview("You are looking at it"),
            Node::directory(
                "archive",
                vec![Node::file(
                    "ascii-invaders",
                    "A terminal shoot-'em-up from my first summer of Rust.",
                )
                .with_description("Retired side project")],
            )
            .with_description("Older work")
            .with_preview("Retired projects"),
        ],
    )
    .with_description("Things I have built")
    .with_preview("3 projects and an archive")
}

fn skills() -> Node {
    Node::directory(
        "skills",
        vec![
            Node::file("languages", "Rust, TypeScript, Python, SQL")
                .with_description("Programming languages"),
            Node::file("frameworks", "Tokio, Axum, React, Next.js")
                .with_description("Frameworks and libraries"),
            Node::file("tools", "Git, Docker, Nix, PostgreSQL, Grafana")
                .with_description("Tooling and infrastructure"),
        ],
    )
    .with_description("What I work with")
    .with_preview("languages, frameworks, tools")
}

fn contact() -> Node {
    Node::directory(
        "contact",
        vec![
            Node::file("email", "hello@example.com")
                .with_description("Send me an email")
                .with_link("mailto:hello@example.com"),
            Node::file("github", "github.com/example")
                .with_description("Code and experiments")
                .with_link("https://github.com/example"),
            Node::file("linkedin", "linkedin.com/in/example")
                .with_description("Professional profile")
                .with_link("https://www.linkedin.com/in/example"),
        ],
    )
    .with_description("Ways to reach me")
    .with_preview("email, github, linkedin")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_tree_is_valid() {
        let tree = sample_tree().unwrap();
        let names: Vec<&str> = tree.root().children().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["projects", "skills", "contact"]);

        let projects = tree.root().child("projects").unwrap();
        assert!(projects.child("archive").unwrap().is_directory());
    }

    #[test]
    fn test_sample_tree_serializes_and_reloads() {
        let tree = sample_tree().unwrap();
        let json = serde_json::to_string(tree.root()).unwrap();
        let reloaded = NodeTree::from_json(&json).unwrap();
        assert_eq!(reloaded.root(), tree.root());
    }
}
