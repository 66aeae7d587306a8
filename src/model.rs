/// Rule severity as understood by the analysis platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Minor,
    Major,
    Critical,
    Blocker,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Minor => "MINOR",
            Severity::Major => "MAJOR",
            Severity::Critical => "CRITICAL",
            Severity::Blocker => "BLOCKER",
        }
    }
}

/// Rule category as understood by the analysis platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    CodeSmell,
    Bug,
    Vulnerability,
}

impl RuleType {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleType::CodeSmell => "CODE_SMELL",
            RuleType::Bug => "BUG",
            RuleType::Vulnerability => "VULNERABILITY",
        }
    }
}

/// A partial set of rule attributes, used as page defaults or per-code
/// overrides. Only the `Some` fields participate when applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertySet {
    pub severity: Option<Severity>,
    pub rule_type: Option<RuleType>,
    pub tags: Option<&'static str>,
    pub internal_key: Option<&'static str>,
    pub remediation_function: Option<&'static str>,
    pub remediation_gap_multiplier: Option<&'static str>,
}

impl PropertySet {
    pub const EMPTY: PropertySet = PropertySet {
        severity: None,
        rule_type: None,
        tags: None,
        internal_key: None,
        remediation_function: None,
        remediation_gap_multiplier: None,
    };

    /// Severity + type pair, the shape every config table entry uses.
    pub const fn rule(severity: Severity, rule_type: RuleType) -> PropertySet {
        PropertySet {
            severity: Some(severity),
            rule_type: Some(rule_type),
            tags: None,
            internal_key: None,
            remediation_function: None,
            remediation_gap_multiplier: None,
        }
    }
}

/// One diagnostic code on its way to becoming a rule entry.
///
/// Created with just `{key, href}` at harvest time, filled in by page
/// defaults, page content, and overrides in that order.
#[derive(Debug, Clone)]
pub struct WarningRecord {
    pub key: String,
    pub href: String,
    pub name: String,
    pub description: String,
    pub tags: Option<String>,
    pub internal_key: Option<String>,
    pub severity: Option<Severity>,
    pub rule_type: Option<RuleType>,
    pub remediation_function: Option<String>,
    pub remediation_gap_multiplier: Option<String>,
}

impl WarningRecord {
    pub fn new(key: &str, href: &str) -> WarningRecord {
        WarningRecord {
            key: key.to_string(),
            href: href.to_string(),
            name: String::new(),
            description: String::new(),
            tags: None,
            internal_key: None,
            severity: None,
            rule_type: None,
            remediation_function: None,
            remediation_gap_multiplier: None,
        }
    }

    /// Copy the `Some` fields of `props` into this record. With
    /// `override_existing` the incoming value always wins; otherwise a field
    /// already set on the record is left untouched.
    pub fn apply(&mut self, props: &PropertySet, override_existing: bool) {
        fn set<T>(slot: &mut Option<T>, value: Option<T>, force: bool) {
            if let Some(v) = value {
                if force || slot.is_none() {
                    *slot = Some(v);
                }
            }
        }
        set(&mut self.severity, props.severity, override_existing);
        set(&mut self.rule_type, props.rule_type, override_existing);
        set(&mut self.tags, props.tags.map(str::to_string), override_existing);
        set(
            &mut self.internal_key,
            props.internal_key.map(str::to_string),
            override_existing,
        );
        set(
            &mut self.remediation_function,
            props.remediation_function.map(str::to_string),
            override_existing,
        );
        set(
            &mut self.remediation_gap_multiplier,
            props.remediation_gap_multiplier.map(str::to_string),
            override_existing,
        );
    }

    /// Numeric part of the code, for ascending sort (C399 < C4001).
    pub fn sort_key(&self) -> u64 {
        self.key
            .get(1..)
            .and_then(|digits| digits.parse().ok())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_never_overwrite() {
        let mut rec = WarningRecord::new("C4001", "/x");
        rec.severity = Some(Severity::Major);
        rec.apply(&PropertySet::rule(Severity::Info, RuleType::CodeSmell), false);
        assert_eq!(rec.severity, Some(Severity::Major));
        // Unset field still picks up the default
        assert_eq!(rec.rule_type, Some(RuleType::CodeSmell));
    }

    #[test]
    fn overrides_always_overwrite() {
        let mut rec = WarningRecord::new("C4001", "/x");
        rec.severity = Some(Severity::Major);
        rec.apply(&PropertySet::rule(Severity::Info, RuleType::CodeSmell), true);
        assert_eq!(rec.severity, Some(Severity::Info));
    }

    #[test]
    fn absent_fields_leave_record_alone() {
        let mut rec = WarningRecord::new("C4001", "/x");
        rec.severity = Some(Severity::Minor);
        rec.apply(&PropertySet::EMPTY, true);
        assert_eq!(rec.severity, Some(Severity::Minor));
    }

    #[test]
    fn sort_key_is_numeric_suffix() {
        assert_eq!(WarningRecord::new("C399", "").sort_key(), 399);
        assert_eq!(WarningRecord::new("C4001", "").sort_key(), 4001);
        assert!(WarningRecord::new("C40", "").sort_key() < WarningRecord::new("C399", "").sort_key());
    }
}
