use gpa_certificate::{CertificatePayload, CertificateRow};
use gpa_core::entities::{GpaSummary, SubjectInput, SubjectSheet};
use schemars::Schema;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};

/// Handle `gpa schema`. Always prints JSON, whatever `--format` says.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_for(args.type_name);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn schema_for(type_name: SchemaType) -> Schema {
    match type_name {
        SchemaType::SubjectSheet => schemars::schema_for!(SubjectSheet),
        SchemaType::Subject => schemars::schema_for!(SubjectInput),
        SchemaType::Summary => schemars::schema_for!(GpaSummary),
        SchemaType::Row => schemars::schema_for!(CertificateRow),
        SchemaType::Payload => schemars::schema_for!(CertificatePayload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_schema_lists_subject_array() {
        let value = serde_json::to_value(schema_for(SchemaType::SubjectSheet)).unwrap();
        assert_eq!(value["title"], "SubjectSheet");
        assert_eq!(value["properties"]["subject"]["type"], "array");
    }

    #[test]
    fn every_schema_type_serializes() {
        for type_name in [
            SchemaType::SubjectSheet,
            SchemaType::Subject,
            SchemaType::Summary,
            SchemaType::Row,
            SchemaType::Payload,
        ] {
            let value = serde_json::to_value(schema_for(type_name)).unwrap();
            assert!(value.get("$schema").is_some());
        }
    }
}
