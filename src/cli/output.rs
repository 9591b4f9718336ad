use serde::Serialize;
use std::path::Path;

use crate::types::{DeploymentPlan, Tier};

/// JSON document handed to the downstream copy/strip stage.
#[derive(Serialize)]
struct PlanDocument<'a> {
    #[serde(flatten)]
    plan: &'a DeploymentPlan,
    redistributable: Option<&'a Path>,
}

pub fn render(
    plan: &DeploymentPlan,
    redistributable: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let doc = PlanDocument {
            plan,
            redistributable,
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Libraries to deploy ({}):", plan.libraries.len());
    for record in &plan.libraries {
        println!(
            "  [{}] depth {}  {}",
            tier_label(record.tier),
            record.depth,
            record.path.display()
        );
    }

    if !plan.translations.is_empty() {
        println!("Translations:");
        for stem in &plan.translations {
            println!("  {stem}");
        }
    }

    if let Some(file) = redistributable {
        println!("Redistributable: {}", file.display());
    }

    Ok(())
}

fn tier_label(tier: Tier) -> &'static str {
    match tier {
        Tier::NotAFile => "missing",
        Tier::Framework => "framework",
        Tier::Extra => "extra",
        Tier::System => "system",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LibraryRecord;

    #[test]
    fn json_document_carries_redistributable() {
        let mut plan = DeploymentPlan::default();
        plan.libraries
            .push(LibraryRecord::new("/opt/qt/lib/libQt5Core.so.5", Tier::Framework, 1));

        let doc = PlanDocument {
            plan: &plan,
            redistributable: Some(Path::new("/opt/Qt/vcredist/vcredist_msvc2017_x64.exe")),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["libraries"].is_array());
        assert_eq!(
            json["redistributable"],
            "/opt/Qt/vcredist/vcredist_msvc2017_x64.exe"
        );
    }

    #[test]
    fn tier_labels_are_stable() {
        assert_eq!(tier_label(Tier::Framework), "framework");
        assert_eq!(tier_label(Tier::System), "system");
    }
}
