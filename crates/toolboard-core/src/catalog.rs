use serde::Serialize;
use std::collections::BTreeSet;

/// Category label for tools the catalog does not know.
pub const UNCATEGORIZED: &str = "uncategorized";

// ---------------------------------------------------------------------------
// Category / ToolCatalog
// ---------------------------------------------------------------------------

/// A named, ordered group of tool names. Duplicates across categories are
/// permitted; `category_of` resolves them to the first declaring category.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub label: String,
    pub tools: Vec<String>,
}

impl Category {
    fn new(label: &str, tools: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            tools: tools.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// The hand-maintained taxonomy of MCP server tools, used as the join key
/// set for reporting. Purely a lookup structure.
#[derive(Debug, Clone, Serialize)]
pub struct ToolCatalog {
    categories: Vec<Category>,
}

impl ToolCatalog {
    /// The server's tool taxonomy: 8 categories, 45 tools.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                Category::new(
                    "Foundation Tools",
                    &[
                        "test_connection",
                        "list_cleanrooms",
                        "list_questions",
                        "configure_data_connection_fields",
                        "complete_data_connection_setup",
                        "create_aws_s3_connection",
                        "start_aws_s3_connection_wizard",
                        "create_bigquery_connection_wizard",
                        "start_clean_room_creation_wizard",
                    ],
                ),
                Category::new(
                    "Partner Collaboration",
                    &[
                        "invite_partner_to_cleanroom",
                        "manage_partner_invitations",
                        "configure_partner_permissions",
                        "partner_onboarding_wizard",
                    ],
                ),
                Category::new(
                    "Question Management",
                    &[
                        "deploy_question_to_cleanroom",
                        "question_management_wizard",
                        "manage_question_permissions",
                        "question_scheduling_wizard",
                    ],
                ),
                Category::new(
                    "Dataset Management",
                    &[
                        "provision_dataset_to_cleanroom",
                        "dataset_configuration_wizard",
                        "manage_dataset_permissions",
                        "dataset_transformation_wizard",
                    ],
                ),
                Category::new(
                    "Execution & Results",
                    &[
                        "execute_question_run",
                        "check_question_run_status",
                        "results_access_and_export",
                        "scheduled_run_management",
                    ],
                ),
                Category::new(
                    "Clean Room Lifecycle",
                    &[
                        "update_cleanroom_configuration",
                        "cleanroom_health_monitoring",
                        "cleanroom_lifecycle_manager",
                        "cleanroom_access_audit",
                    ],
                ),
                Category::new(
                    "Multi-Cloud Data",
                    &[
                        "create_snowflake_connection_wizard",
                        "create_databricks_connection_wizard",
                        "create_gcs_connection_wizard",
                        "create_azure_connection_wizard",
                        "data_connection_health_monitor",
                    ],
                ),
                Category::new(
                    "Enterprise Tools",
                    &[
                        "data_export_workflow_manager",
                        "execution_template_manager",
                        "advanced_user_management",
                    ],
                ),
            ],
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Union of tool names across all categories.
    pub fn all_tool_names(&self) -> BTreeSet<String> {
        self.categories
            .iter()
            .flat_map(|c| c.tools.iter().cloned())
            .collect()
    }

    /// Category label for a tool name; first declaring category wins.
    pub fn category_of(&self, name: &str) -> &str {
        self.categories
            .iter()
            .find(|c| c.tools.iter().any(|t| t == name))
            .map(|c| c.label.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.tools.iter().any(|t| t == name))
    }

    /// Total tool slots across categories (duplicates counted per slot).
    pub fn tool_count(&self) -> usize {
        self.categories.iter().map(|c| c.tools.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
