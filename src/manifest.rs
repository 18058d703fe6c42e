//! Default document manifest.
//!
//! The ordered list of agent definition files harvested when no manifest is
//! configured. Order here is catalog output order.

/// Upstream agent definition files, in harvest order.
pub const DEFAULT_AGENT_FILES: &[&str] = &[
    "ai-engineer.md",
    "api-documenter.md",
    "architect-review.md",
    "backend-architect.md",
    "business-analyst.md",
    "c-pro.md",
    "cloud-architect.md",
    "code-reviewer.md",
    "content-marketer.md",
    "context-manager.md",
    "cpp-pro.md",
    "csharp-pro.md",
    "customer-support.md",
    "data-engineer.md",
    "data-scientist.md",
    "database-admin.md",
    "database-optimizer.md",
    "debugger.md",
    "deployment-engineer.md",
    "devops-troubleshooter.md",
    "docs-architect.md",
    "dx-optimizer.md",
    "elixir-pro.md",
    "error-detective.md",
    "flutter-expert.md",
    "frontend-developer.md",
    "golang-pro.md",
    "graphql-architect.md",
    "hr-pro.md",
    "hybrid-cloud-architect.md",
    "incident-responder.md",
    "ios-developer.md",
    "java-pro.md",
    "javascript-pro.md",
    "kubernetes-architect.md",
    "legacy-modernizer.md",
    "legal-advisor.md",
    "mermaid-expert.md",
    "minecraft-bukkit-pro.md",
    "ml-engineer.md",
    "mlops-engineer.md",
    "mobile-developer.md",
    "network-engineer.md",
    "payment-integration.md",
    "performance-engineer.md",
    "php-pro.md",
    "prompt-engineer.md",
    "python-pro.md",
    "quant-analyst.md",
    "reference-builder.md",
    "risk-manager.md",
    "ruby-pro.md",
    "rust-pro.md",
    "sales-automator.md",
    "scala-pro.md",
    "search-specialist.md",
    "security-auditor.md",
    "seo-authority-builder.md",
    "seo-cannibalization-detector.md",
    "seo-content-auditor.md",
    "seo-content-planner.md",
    "seo-content-refresher.md",
    "seo-content-writer.md",
    "seo-keyword-strategist.md",
    "seo-meta-optimizer.md",
    "seo-snippet-hunter.md",
    "seo-structure-architect.md",
    "sql-pro.md",
    "terraform-specialist.md",
    "test-automator.md",
    "tutorial-engineer.md",
    "typescript-pro.md",
    "ui-ux-designer.md",
    "unity-developer.md",
];

/// Owned copy of the default manifest, used as the config default.
pub fn default_manifest() -> Vec<String> {
    DEFAULT_AGENT_FILES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manifest_matches_const_list() {
        let manifest = default_manifest();
        assert_eq!(manifest.len(), DEFAULT_AGENT_FILES.len());
        assert_eq!(manifest.first().map(String::as_str), Some("ai-engineer.md"));
        assert_eq!(manifest.last().map(String::as_str), Some("unity-developer.md"));
    }

    #[test]
    fn manifest_entries_are_markdown_files() {
        assert!(DEFAULT_AGENT_FILES.iter().all(|f| f.ends_with(".md")));
    }
}
