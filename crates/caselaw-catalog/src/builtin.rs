//! Built-in theme table for medical-device litigation and enforcement
//!
//! Keyword sets carry both English and German variants since the corpus
//! mixes US and EU decisions. Keywords are matched as lower-cased
//! substrings, so multi-word phrases are preferred over short tokens.

use caselaw_domain::{LegalTheme, PrecedentValue, ThemeId};

fn theme(
    id: &str,
    name: &str,
    description: &str,
    keywords: &[&str],
    precedent_value: PrecedentValue,
    jurisdictions: &[&str],
    category: &str,
) -> LegalTheme {
    LegalTheme {
        id: ThemeId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        precedent_value,
        jurisdictions: jurisdictions.iter().map(|j| j.to_string()).collect(),
        category: category.to_string(),
    }
}

/// The default theme table
pub(crate) fn builtin_themes() -> Vec<LegalTheme> {
    vec![
        theme(
            "product_liability",
            "Product Liability",
            "Liability of manufacturers for defective medical devices",
            &[
                "product liability",
                "defective device",
                "manufacturer liability",
                "design defect",
                "produkthaftung",
                "fehlerhaftes produkt",
            ],
            PrecedentValue::High,
            &["US", "EU", "DE"],
            "litigation",
        ),
        theme(
            "failure_to_warn",
            "Failure to Warn",
            "Inadequate warnings, labeling, or instructions for use",
            &[
                "failure to warn",
                "warning label",
                "instructions for use",
                "inadequate warning",
                "warnhinweis",
            ],
            PrecedentValue::High,
            &["US", "EU", "DE"],
            "litigation",
        ),
        theme(
            "regulatory_approval",
            "Regulatory Approval",
            "Market authorization and premarket review disputes",
            &[
                "regulatory approval",
                "market authorization",
                "premarket approval",
                "510(k)",
                "ce mark",
                "zulassung",
            ],
            PrecedentValue::High,
            &["US", "EU", "DE"],
            "regulatory",
        ),
        theme(
            "device_recall",
            "Device Recall",
            "Recalls and field safety corrective actions",
            &[
                "recall",
                "field safety corrective action",
                "market withdrawal",
                "rückruf",
            ],
            PrecedentValue::Medium,
            &["US", "EU", "DE"],
            "regulatory",
        ),
        theme(
            "clinical_trials",
            "Clinical Trials",
            "Trial conduct, informed consent, and study protocol disputes",
            &[
                "clinical trial",
                "informed consent",
                "study protocol",
                "clinical investigation",
                "klinische prüfung",
            ],
            PrecedentValue::Medium,
            &["US", "EU", "DE"],
            "regulatory",
        ),
        theme(
            "off_label_use",
            "Off-Label Use",
            "Use or promotion of devices outside their intended purpose",
            &[
                "off-label",
                "off label",
                "intended purpose",
                "zweckbestimmung",
            ],
            PrecedentValue::Medium,
            &["US", "EU", "DE"],
            "enforcement",
        ),
        theme(
            "negligence",
            "Negligence and Malpractice",
            "Breach of duty of care in device manufacture or clinical use",
            &[
                "negligence",
                "malpractice",
                "duty of care",
                "standard of care",
                "fahrlässigkeit",
            ],
            PrecedentValue::High,
            &["US", "EU", "DE"],
            "litigation",
        ),
        theme(
            "patent_dispute",
            "Patent Disputes",
            "Patent infringement and validity fights over device technology",
            &[
                "patent infringement",
                "patent validity",
                "intellectual property",
                "patentverletzung",
            ],
            PrecedentValue::Medium,
            &["US", "EU", "DE"],
            "litigation",
        ),
        theme(
            "data_protection",
            "Data Protection",
            "Patient data handling by connected devices and manufacturers",
            &[
                "data protection",
                "patient data",
                "gdpr",
                "datenschutz",
            ],
            PrecedentValue::Medium,
            &["EU", "DE"],
            "enforcement",
        ),
    ]
}
