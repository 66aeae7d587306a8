use anyhow::Result;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::model::{RuleType, Severity, WarningRecord};

const TEMPLATE_KEY: &str = "CustomRuleTemplate";
const TEMPLATE_NAME: &str = "Template for custom Custom rules";
const TEMPLATE_SEVERITY: Severity = Severity::Major;
const TEMPLATE_DESCRIPTION: &str = r#"<p>Follow these steps to make your custom Custom rules available in SonarQube:</p>
<ol>
  <ol>
    <li>Create a new rule in SonarQube by "copying" this rule template and specify the <code>CheckId</code> of your custom rule, a title, a description, and a default severity.</li>
    <li>Enable the newly created rule in your quality profile</li>
  </ol>
  <li>Relaunch an analysis on your projects, et voilà, your custom rules are executed!</li>
</ol>"#;

/// Serialize the template rule plus all records into the final document.
/// Records are expected in their final (sorted, merged) order.
pub fn build_document(records: &[WarningRecord]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("rules")))?;

    write_template_rule(&mut writer)?;
    for record in records {
        write_rule(&mut writer, record)?;
    }

    writer.write_event(Event::End(BytesEnd::new("rules")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Fixed first entry instructing platform users how to author custom rules.
fn write_template_rule(writer: &mut Writer<Vec<u8>>) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("rule")))?;
    text_element(writer, "key", TEMPLATE_KEY)?;
    text_element(writer, "cardinality", "MULTIPLE")?;
    text_element(writer, "name", TEMPLATE_NAME)?;
    cdata_element(writer, "description", TEMPLATE_DESCRIPTION)?;
    text_element(writer, "severity", TEMPLATE_SEVERITY.as_str())?;
    writer.write_event(Event::End(BytesEnd::new("rule")))?;
    Ok(())
}

fn write_rule(writer: &mut Writer<Vec<u8>>, record: &WarningRecord) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("rule")))?;

    // mandatory
    text_element(writer, "key", &record.key)?;
    text_element(writer, "name", &record.name)?;
    cdata_element(writer, "description", &description_html(record))?;

    // optional
    if let Some(tags) = &record.tags {
        for tag in tags.split(',') {
            text_element(writer, "tag", tag)?;
        }
    }
    if let Some(internal_key) = &record.internal_key {
        text_element(writer, "internalKey", internal_key)?;
    }

    text_element(
        writer,
        "severity",
        record.severity.unwrap_or(Severity::Info).as_str(),
    )?;
    text_element(
        writer,
        "type",
        record.rule_type.unwrap_or(RuleType::CodeSmell).as_str(),
    )?;

    // Explicit remediation overrides win; otherwise any rule with an assigned
    // type gets the fixed linear function.
    match (&record.remediation_function, &record.remediation_gap_multiplier) {
        (Some(function), Some(gap)) => {
            text_element(writer, "remediationFunction", function)?;
            text_element(writer, "remediationFunctionGapMultiplier", gap)?;
        }
        _ if record.rule_type.is_some() => {
            text_element(writer, "remediationFunction", "LINEAR")?;
            text_element(writer, "remediationFunctionGapMultiplier", "5min")?;
        }
        _ => {}
    }

    writer.write_event(Event::End(BytesEnd::new("rule")))?;
    Ok(())
}

/// CDATA payload: the page paragraph followed by a backlink to the
/// original documentation.
fn description_html(record: &WarningRecord) -> String {
    format!(
        "\n{}\n<h2>Microsoft Documentation</h2>\n<p><a href=\"{}\" target=\"_blank\">{}</a></p>",
        record.description, record.href, record.key
    )
}

fn text_element(writer: &mut Writer<Vec<u8>>, tag: &str, value: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn cdata_element(writer: &mut Writer<Vec<u8>>, tag: &str, value: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::CData(BytesCData::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str) -> WarningRecord {
        let mut rec = WarningRecord::new(key, "https://docs.example/w");
        rec.name = format!("{key}: something");
        rec.description = "<p>desc</p>".to_string();
        rec
    }

    #[test]
    fn template_rule_comes_first() {
        let xml = build_document(&[record("C4001")]).unwrap();
        let template_pos = xml.find("CustomRuleTemplate").unwrap();
        let rule_pos = xml.find("C4001").unwrap();
        assert!(template_pos < rule_pos);
        assert!(xml.contains("<cardinality>MULTIPLE</cardinality>"));
    }

    #[test]
    fn unset_fields_get_defaults_and_no_remediation() {
        let xml = build_document(&[record("C4001")]).unwrap();
        assert!(xml.contains("<severity>INFO</severity>"));
        assert!(xml.contains("<type>CODE_SMELL</type>"));
        // Only the template-free rule matters here: type was never set
        assert!(!xml.contains("<remediationFunction>"));
    }

    #[test]
    fn assigned_type_emits_fixed_remediation() {
        let mut rec = record("C4020");
        rec.severity = Some(Severity::Major);
        rec.rule_type = Some(RuleType::Bug);
        let xml = build_document(&[rec]).unwrap();
        assert!(xml.contains("<type>BUG</type>"));
        assert!(xml.contains("<remediationFunction>LINEAR</remediationFunction>"));
        assert!(xml.contains("<remediationFunctionGapMultiplier>5min</remediationFunctionGapMultiplier>"));
    }

    #[test]
    fn explicit_remediation_pair_wins() {
        let mut rec = record("C6001");
        rec.rule_type = Some(RuleType::Bug);
        rec.remediation_function = Some("CONSTANT_ISSUE".to_string());
        rec.remediation_gap_multiplier = Some("30min".to_string());
        let xml = build_document(&[rec]).unwrap();
        assert!(xml.contains("<remediationFunction>CONSTANT_ISSUE</remediationFunction>"));
        assert!(xml.contains("<remediationFunctionGapMultiplier>30min</remediationFunctionGapMultiplier>"));
        assert!(!xml.contains("LINEAR"));
    }

    #[test]
    fn tags_and_internal_key_are_conditional() {
        let mut rec = record("C4100");
        rec.tags = Some("pitfall,suspicious".to_string());
        rec.internal_key = Some("vc.C4100".to_string());
        let xml = build_document(&[rec]).unwrap();
        assert!(xml.contains("<tag>pitfall</tag>"));
        assert!(xml.contains("<tag>suspicious</tag>"));
        assert!(xml.contains("<internalKey>vc.C4100</internalKey>"));

        let xml = build_document(&[record("C4101")]).unwrap();
        assert!(!xml.contains("<tag>"));
        assert!(!xml.contains("<internalKey>"));
    }

    #[test]
    fn description_is_cdata_with_backlink() {
        let xml = build_document(&[record("C4001")]).unwrap();
        assert!(xml.contains("<![CDATA[\n<p>desc</p>\n<h2>Microsoft Documentation</h2>"));
        assert!(xml.contains("<a href=\"https://docs.example/w\" target=\"_blank\">C4001</a>"));
        assert!(xml.contains("]]>"));
    }
}
