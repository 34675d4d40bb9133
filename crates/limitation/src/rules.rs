//! Limitation rule table and matcher.
//!
//! Rules are plain const data, ported from the statute text so the
//! table can be audited against it independently of the engine.
//!
//! Sources: The Limitation Act, 1963; Code of Civil Procedure, 1908;
//! Code of Criminal Procedure, 1973 / Bharatiya Nagarik Suraksha
//! Sanhita, 2023; Supreme Court Rules, 2013; High Court Rules
//! (general); Family Courts Act, 1984; Commercial Courts Act, 2015;
//! Consumer Protection Act, 2019. The rules are procedural guidance;
//! actual limitation may vary with court rules and judicial
//! discretion, which is what `confidence_level` expresses.

use serde::Serialize;

use crate::types::{CaseType, ConfidenceLevel, CourtLevel, JudgmentType, LegalAction};

/// One row of the limitation rule table. Defined once at system
/// initialization; never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitationRule {
    pub id: &'static str,
    pub version: &'static str,
    pub case_type: CaseType,
    pub from_court: CourtLevel,
    pub action: LegalAction,
    pub to_court: CourtLevel,
    pub limitation_days: i64,
    pub copy_exclusion_allowed: bool,
    pub law_reference: &'static str,
    pub section: &'static str,
    pub confidence_level: ConfidenceLevel,
    pub applicable_judgment_types: &'static [JudgmentType],
    pub additional_notes: &'static str,
}

const FINAL_ONLY: &[JudgmentType] = &[JudgmentType::Final];
const FINAL_AND_INTERIM: &[JudgmentType] = &[JudgmentType::Final, JudgmentType::Interim];

/// The complete rule table. Rows added or re-cited in the 1.1.0 pass
/// (BNSS 2023 renumbering, subordinate civil judiciary, family,
/// commercial and consumer forums) carry version "1.1.0"; untouched
/// 1.0.0 rows keep their original version.
pub const LIMITATION_RULES: &[LimitationRule] = &[
    // ── Civil: Civil Judge (Junior Division) ──────────────
    LimitationRule {
        id: "civil_cjjd_appeal_dc",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::CivilJudgeJunior,
        action: LegalAction::Appeal,
        to_court: CourtLevel::DistrictCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Article 116(b), Limitation Act, 1963",
        section: "First Appeal to District Court",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "First appeal from Civil Judge (Junior Division) lies to District Court within 30 days. Art. 116(b) — appeal 'to any other court' from a decree or order.",
    },
    LimitationRule {
        id: "civil_cjjd_review",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::CivilJudgeJunior,
        action: LegalAction::Review,
        to_court: CourtLevel::CivilJudgeJunior,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Order XLVII Rule 1, CPC read with Article 124",
        section: "Review of Judgment",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes:
            "Review lies on grounds of discovery of new matter, mistake or error apparent on face of record.",
    },
    LimitationRule {
        id: "civil_cjjd_revision_dc",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::CivilJudgeJunior,
        action: LegalAction::Revision,
        to_court: CourtLevel::DistrictCourt,
        limitation_days: 90,
        copy_exclusion_allowed: true,
        law_reference: "Section 115, CPC read with Article 131",
        section: "Revision Petition",
        confidence_level: ConfidenceLevel::Medium,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes:
            "Revision lies to District Court where no appeal lies. Subject to jurisdictional limits per State HC Rules.",
    },
    LimitationRule {
        id: "civil_cjjd_execution",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::CivilJudgeJunior,
        action: LegalAction::Execution,
        to_court: CourtLevel::CivilJudgeJunior,
        limitation_days: 4380, // 12 years
        copy_exclusion_allowed: false,
        law_reference: "Article 136, Limitation Act, 1963",
        section: "Execution of Decree",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Execution can be filed within 12 years from date when decree becomes enforceable.",
    },
    // ── Civil: Civil Judge (Senior Division) ──────────────
    LimitationRule {
        id: "civil_cjsd_appeal_dc",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::CivilJudgeSenior,
        action: LegalAction::Appeal,
        to_court: CourtLevel::DistrictCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Article 116(b), Limitation Act, 1963",
        section: "First Appeal to District Court",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "For suits below the pecuniary threshold, appeal lies to District Court within 30 days. Threshold varies by state (e.g., Rs. 3 lakh in many states).",
    },
    LimitationRule {
        id: "civil_cjsd_appeal_hc",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::CivilJudgeSenior,
        action: LegalAction::Appeal,
        to_court: CourtLevel::HighCourt,
        limitation_days: 90,
        copy_exclusion_allowed: true,
        law_reference: "Article 116(a), Limitation Act, 1963",
        section: "First Appeal to High Court",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "For suits above the pecuniary threshold, appeal lies to High Court within 90 days. Threshold varies by state. Check your state's pecuniary jurisdiction rules.",
    },
    LimitationRule {
        id: "civil_cjsd_review",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::CivilJudgeSenior,
        action: LegalAction::Review,
        to_court: CourtLevel::CivilJudgeSenior,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Order XLVII Rule 1, CPC read with Article 124",
        section: "Review of Judgment",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes:
            "Review lies on grounds of discovery of new matter, mistake or error apparent on face of record.",
    },
    LimitationRule {
        id: "civil_cjsd_revision_hc",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::CivilJudgeSenior,
        action: LegalAction::Revision,
        to_court: CourtLevel::HighCourt,
        limitation_days: 90,
        copy_exclusion_allowed: true,
        law_reference: "Section 115, CPC read with Article 131",
        section: "Revision Petition",
        confidence_level: ConfidenceLevel::Medium,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes:
            "Revision lies to High Court where no appeal lies. Subject to jurisdictional limits per State HC Rules.",
    },
    LimitationRule {
        id: "civil_cjsd_execution",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::CivilJudgeSenior,
        action: LegalAction::Execution,
        to_court: CourtLevel::CivilJudgeSenior,
        limitation_days: 4380, // 12 years
        copy_exclusion_allowed: false,
        law_reference: "Article 136, Limitation Act, 1963",
        section: "Execution of Decree",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Execution can be filed within 12 years from date when decree becomes enforceable.",
    },
    // ── Civil: District Court ─────────────────────────────
    LimitationRule {
        id: "civil_dc_appeal_hc",
        version: "1.0.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::DistrictCourt,
        action: LegalAction::Appeal,
        to_court: CourtLevel::HighCourt,
        limitation_days: 90,
        copy_exclusion_allowed: true,
        law_reference: "Article 116, Limitation Act, 1963",
        section: "First Appeals under CPC",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "First appeal lies to High Court from decree of District Court in civil suits.",
    },
    LimitationRule {
        id: "civil_dc_review",
        version: "1.0.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::DistrictCourt,
        action: LegalAction::Review,
        to_court: CourtLevel::DistrictCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Order XLVII Rule 1, CPC read with Article 124",
        section: "Review of Judgment",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes:
            "Review lies on grounds of discovery of new matter, mistake or error apparent on face of record.",
    },
    LimitationRule {
        id: "civil_dc_revision_hc",
        version: "1.0.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::DistrictCourt,
        action: LegalAction::Revision,
        to_court: CourtLevel::HighCourt,
        limitation_days: 90,
        copy_exclusion_allowed: true,
        law_reference: "Section 115, CPC read with Article 131",
        section: "Revision Petition",
        confidence_level: ConfidenceLevel::Medium,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes:
            "Revision lies where no appeal lies. Subject to jurisdictional limits per State HC Rules.",
    },
    LimitationRule {
        id: "civil_dc_execution",
        version: "1.0.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::DistrictCourt,
        action: LegalAction::Execution,
        to_court: CourtLevel::DistrictCourt,
        limitation_days: 4380, // 12 years
        copy_exclusion_allowed: false,
        law_reference: "Article 136, Limitation Act, 1963",
        section: "Execution of Decree",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Execution can be filed within 12 years from date when decree becomes enforceable.",
    },
    // ── Civil: High Court (original side) ─────────────────
    LimitationRule {
        id: "civil_hc_appeal_sc",
        version: "1.0.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::HighCourt,
        action: LegalAction::Appeal,
        to_court: CourtLevel::SupremeCourt,
        limitation_days: 90,
        copy_exclusion_allowed: true,
        law_reference: "Article 133, Constitution; Article 116, Limitation Act",
        section: "Appeal to Supreme Court",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Civil appeal requires certificate from HC or leave from SC. 90 days from judgment.",
    },
    LimitationRule {
        id: "civil_hc_review",
        version: "1.0.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::HighCourt,
        action: LegalAction::Review,
        to_court: CourtLevel::HighCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Order XLVII, CPC; Article 124, Limitation Act",
        section: "Review Petition",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes: "Review petition in HC follows same grounds as District Court reviews.",
    },
    LimitationRule {
        id: "civil_hc_slp",
        version: "1.0.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::HighCourt,
        action: LegalAction::Slp,
        to_court: CourtLevel::SupremeCourt,
        limitation_days: 90,
        copy_exclusion_allowed: true,
        law_reference: "Article 136, Constitution; SC Rules Order XIII",
        section: "Special Leave Petition",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes:
            "SLP can be filed against any order/judgment. 90 days from date of order. Subject to SC discretion.",
    },
    LimitationRule {
        id: "civil_hc_execution",
        version: "1.0.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::HighCourt,
        action: LegalAction::Execution,
        to_court: CourtLevel::HighCourt,
        limitation_days: 4380,
        copy_exclusion_allowed: false,
        law_reference: "Article 136, Limitation Act, 1963",
        section: "Execution of Decree",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes: "12 years from date decree becomes enforceable.",
    },
    // ── Civil: Supreme Court ──────────────────────────────
    LimitationRule {
        id: "civil_sc_review",
        version: "1.0.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::SupremeCourt,
        action: LegalAction::Review,
        to_court: CourtLevel::SupremeCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Order XL, Supreme Court Rules 2013",
        section: "Review Petition",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Review in SC is extremely limited. Error apparent on face of record required.",
    },
    LimitationRule {
        id: "civil_sc_curative",
        version: "1.0.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::SupremeCourt,
        action: LegalAction::Curative,
        to_court: CourtLevel::SupremeCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Rupa Ashok Hurra v. Ashok Hurra (2002) 4 SCC 388",
        section: "Curative Petition",
        confidence_level: ConfidenceLevel::Medium,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Last remedy after review dismissed. Must be certified by Sr. Advocate. Very rare.",
    },
    // ── Criminal: JMFC / Metropolitan Magistrate ──────────
    LimitationRule {
        id: "criminal_jmfc_appeal_sessions",
        version: "1.1.0",
        case_type: CaseType::Criminal,
        from_court: CourtLevel::Jmfc,
        action: LegalAction::Appeal,
        to_court: CourtLevel::SessionsCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference:
            "Section 417, BNSS 2023 (formerly Section 374, CrPC); Article 115(c), Limitation Act",
        section: "Criminal Appeal to Sessions Court",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Appeal against conviction by JMFC/Metropolitan Magistrate lies to Sessions Court within 30 days. Art. 115(c) — appeal 'to any other court'.",
    },
    LimitationRule {
        id: "criminal_jmfc_revision_sessions",
        version: "1.1.0",
        case_type: CaseType::Criminal,
        from_court: CourtLevel::Jmfc,
        action: LegalAction::Revision,
        to_court: CourtLevel::SessionsCourt,
        limitation_days: 90,
        copy_exclusion_allowed: true,
        law_reference: "Section 442-446, BNSS 2023 (formerly Section 397-401, CrPC)",
        section: "Criminal Revision",
        confidence_level: ConfidenceLevel::Medium,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes:
            "Revision where appeal does not lie or not preferred. Sessions Court can call for records.",
    },
    // ── Criminal: Chief Judicial Magistrate ───────────────
    LimitationRule {
        id: "criminal_cjm_appeal_sessions",
        version: "1.1.0",
        case_type: CaseType::Criminal,
        from_court: CourtLevel::Cjm,
        action: LegalAction::Appeal,
        to_court: CourtLevel::SessionsCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference:
            "Section 417, BNSS 2023 (formerly Section 374, CrPC); Article 115(c), Limitation Act",
        section: "Criminal Appeal to Sessions Court",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Appeal against conviction by CJM lies to Sessions Court within 30 days. Art. 115(c) — appeal 'to any other court'.",
    },
    LimitationRule {
        id: "criminal_cjm_revision_sessions",
        version: "1.1.0",
        case_type: CaseType::Criminal,
        from_court: CourtLevel::Cjm,
        action: LegalAction::Revision,
        to_court: CourtLevel::SessionsCourt,
        limitation_days: 90,
        copy_exclusion_allowed: true,
        law_reference: "Section 442-446, BNSS 2023 (formerly Section 397-401, CrPC)",
        section: "Criminal Revision",
        confidence_level: ConfidenceLevel::Medium,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes:
            "Revision where appeal does not lie or not preferred. Sessions Court can call for records.",
    },
    // ── Criminal: Sessions Court ──────────────────────────
    LimitationRule {
        id: "criminal_sessions_appeal_hc",
        version: "1.1.0",
        case_type: CaseType::Criminal,
        from_court: CourtLevel::SessionsCourt,
        action: LegalAction::Appeal,
        to_court: CourtLevel::HighCourt,
        limitation_days: 60,
        copy_exclusion_allowed: true,
        law_reference:
            "Section 417, BNSS 2023 (formerly Section 374, CrPC); Article 115(b), Limitation Act",
        section: "Criminal Appeal",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Appeal against conviction by Sessions Court lies to High Court within 60 days. Art. 115(b) — appeal 'to High Court'.",
    },
    LimitationRule {
        id: "criminal_sessions_revision_hc",
        version: "1.1.0",
        case_type: CaseType::Criminal,
        from_court: CourtLevel::SessionsCourt,
        action: LegalAction::Revision,
        to_court: CourtLevel::HighCourt,
        limitation_days: 90,
        copy_exclusion_allowed: true,
        law_reference: "Section 442-446, BNSS 2023 (formerly Section 397-401, CrPC)",
        section: "Criminal Revision",
        confidence_level: ConfidenceLevel::Medium,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes:
            "Revision where appeal does not lie or not preferred. HC can call for records.",
    },
    // ── Criminal: High Court ──────────────────────────────
    LimitationRule {
        id: "criminal_hc_appeal_sc",
        version: "1.1.0",
        case_type: CaseType::Criminal,
        from_court: CourtLevel::HighCourt,
        action: LegalAction::Appeal,
        to_court: CourtLevel::SupremeCourt,
        limitation_days: 60,
        copy_exclusion_allowed: true,
        law_reference:
            "Article 134, Constitution; Section 421, BNSS 2023 (formerly Section 379, CrPC)",
        section: "Criminal Appeal to SC",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Appeal lies if HC certifies case fit for appeal or reverses acquittal to death sentence.",
    },
    LimitationRule {
        id: "criminal_hc_slp",
        version: "1.0.0",
        case_type: CaseType::Criminal,
        from_court: CourtLevel::HighCourt,
        action: LegalAction::Slp,
        to_court: CourtLevel::SupremeCourt,
        limitation_days: 60,
        copy_exclusion_allowed: true,
        law_reference: "Article 136, Constitution; SC Rules Order XXI",
        section: "SLP (Criminal)",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes: "SLP in criminal matters has 60 days limitation (not 90 as civil).",
    },
    LimitationRule {
        id: "criminal_hc_review",
        version: "1.1.0",
        case_type: CaseType::Criminal,
        from_court: CourtLevel::HighCourt,
        action: LegalAction::Review,
        to_court: CourtLevel::HighCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Inherent Powers Section 528, BNSS 2023 (formerly Section 482, CrPC)",
        section: "Review (Criminal)",
        confidence_level: ConfidenceLevel::Low,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Review in criminal matters is not expressly provided but may be exercised through inherent powers.",
    },
    // ── Criminal: Supreme Court ───────────────────────────
    LimitationRule {
        id: "criminal_sc_review",
        version: "1.0.0",
        case_type: CaseType::Criminal,
        from_court: CourtLevel::SupremeCourt,
        action: LegalAction::Review,
        to_court: CourtLevel::SupremeCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Order XL, Supreme Court Rules 2013",
        section: "Review Petition (Criminal)",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes: "Same as civil review. Very limited grounds.",
    },
    LimitationRule {
        id: "criminal_sc_curative",
        version: "1.0.0",
        case_type: CaseType::Criminal,
        from_court: CourtLevel::SupremeCourt,
        action: LegalAction::Curative,
        to_court: CourtLevel::SupremeCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Rupa Ashok Hurra principle",
        section: "Curative Petition (Criminal)",
        confidence_level: ConfidenceLevel::Low,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Extremely rare. Must show gross miscarriage of justice. Death sentence cases given special consideration.",
    },
    // ── Civil: Family Court ───────────────────────────────
    LimitationRule {
        id: "civil_family_appeal_hc",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::FamilyCourt,
        action: LegalAction::Appeal,
        to_court: CourtLevel::HighCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Section 19(3), Family Courts Act, 1984",
        section: "Appeal to High Court",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Appeal from Family Court decree/order lies to High Court within 30 days. Note: This is shorter than the standard 90 days under Art. 116 — the Family Courts Act overrides the Limitation Act.",
    },
    LimitationRule {
        id: "civil_family_review",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::FamilyCourt,
        action: LegalAction::Review,
        to_court: CourtLevel::FamilyCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Order XLVII CPC applied by analogy; Article 124",
        section: "Review Petition",
        confidence_level: ConfidenceLevel::Medium,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes:
            "Review in Family Court follows general CPC principles. Error apparent on face of record required.",
    },
    LimitationRule {
        id: "civil_family_execution",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::FamilyCourt,
        action: LegalAction::Execution,
        to_court: CourtLevel::FamilyCourt,
        limitation_days: 4380, // 12 years
        copy_exclusion_allowed: false,
        law_reference: "Article 136, Limitation Act, 1963",
        section: "Execution of Decree",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Execution can be filed within 12 years from date when decree becomes enforceable.",
    },
    // ── Civil: Commercial Court ───────────────────────────
    LimitationRule {
        id: "civil_commercial_appeal_hc",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::CommercialCourt,
        action: LegalAction::Appeal,
        to_court: CourtLevel::HighCourt,
        limitation_days: 60,
        copy_exclusion_allowed: true,
        law_reference: "Section 13, Commercial Courts Act, 2015",
        section: "Appeal to Commercial Appellate Division",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Appeal lies to Commercial Appellate Division of High Court within 60 days. Note: This is shorter than the standard 90 days — the Commercial Courts Act overrides the Limitation Act.",
    },
    LimitationRule {
        id: "civil_commercial_review",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::CommercialCourt,
        action: LegalAction::Review,
        to_court: CourtLevel::CommercialCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Order XLVII Rule 1, CPC read with Article 124",
        section: "Review of Judgment",
        confidence_level: ConfidenceLevel::Medium,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes:
            "Review lies on grounds of discovery of new matter, mistake or error apparent on face of record.",
    },
    LimitationRule {
        id: "civil_commercial_execution",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::CommercialCourt,
        action: LegalAction::Execution,
        to_court: CourtLevel::CommercialCourt,
        limitation_days: 4380, // 12 years
        copy_exclusion_allowed: false,
        law_reference: "Article 136, Limitation Act, 1963",
        section: "Execution of Decree",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Execution can be filed within 12 years from date when decree becomes enforceable.",
    },
    // ── Civil: District Consumer Commission ───────────────
    LimitationRule {
        id: "civil_consumer_district_appeal_state",
        version: "1.1.0",
        case_type: CaseType::Civil,
        from_court: CourtLevel::ConsumerDistrict,
        action: LegalAction::Appeal,
        to_court: CourtLevel::ConsumerState,
        limitation_days: 45,
        copy_exclusion_allowed: true,
        law_reference: "Section 41, Consumer Protection Act, 2019",
        section: "Appeal to State Consumer Commission",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Appeal from District Consumer Disputes Redressal Commission lies to State Consumer Disputes Redressal Commission within 45 days. Further appeal: State Commission → National Commission (30 days, s.51) → Supreme Court.",
    },
    // ── Writ: High Court ──────────────────────────────────
    LimitationRule {
        id: "writ_hc_slp",
        version: "1.0.0",
        case_type: CaseType::Writ,
        from_court: CourtLevel::HighCourt,
        action: LegalAction::Slp,
        to_court: CourtLevel::SupremeCourt,
        limitation_days: 90,
        copy_exclusion_allowed: true,
        law_reference: "Article 136, Constitution",
        section: "SLP against Writ Order",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_AND_INTERIM,
        additional_notes:
            "SLP lies against any order of HC in writ jurisdiction. 90 days limitation.",
    },
    LimitationRule {
        id: "writ_hc_review",
        version: "1.0.0",
        case_type: CaseType::Writ,
        from_court: CourtLevel::HighCourt,
        action: LegalAction::Review,
        to_court: CourtLevel::HighCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Order XLVII CPC applied by analogy; HC Rules",
        section: "Review (Writ)",
        confidence_level: ConfidenceLevel::Medium,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Review of writ orders follows principles of Order XLVII CPC. Error apparent on record.",
    },
    LimitationRule {
        id: "writ_hc_appeal_sc",
        version: "1.0.0",
        case_type: CaseType::Writ,
        from_court: CourtLevel::HighCourt,
        action: LegalAction::Appeal,
        to_court: CourtLevel::SupremeCourt,
        limitation_days: 90,
        copy_exclusion_allowed: true,
        law_reference: "Article 132/133, Constitution",
        section: "Appeal (Constitutional)",
        confidence_level: ConfidenceLevel::Medium,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes:
            "Appeal lies if HC certifies substantial question of law of general importance.",
    },
    // ── Writ: Supreme Court ───────────────────────────────
    LimitationRule {
        id: "writ_sc_review",
        version: "1.0.0",
        case_type: CaseType::Writ,
        from_court: CourtLevel::SupremeCourt,
        action: LegalAction::Review,
        to_court: CourtLevel::SupremeCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Order XL, SC Rules 2013",
        section: "Review (SC Writ)",
        confidence_level: ConfidenceLevel::High,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes: "Very limited. Error apparent on face of record.",
    },
    LimitationRule {
        id: "writ_sc_curative",
        version: "1.0.0",
        case_type: CaseType::Writ,
        from_court: CourtLevel::SupremeCourt,
        action: LegalAction::Curative,
        to_court: CourtLevel::SupremeCourt,
        limitation_days: 30,
        copy_exclusion_allowed: true,
        law_reference: "Rupa Ashok Hurra doctrine",
        section: "Curative (SC Writ)",
        confidence_level: ConfidenceLevel::Low,
        applicable_judgment_types: FINAL_ONLY,
        additional_notes: "Last resort. Gross violation of principles of natural justice required.",
    },
];

/// Exact-match filter on case type and originating court, plus a
/// membership test on the judgment type. Returns matches in table
/// declaration order; an empty result is a valid outcome, not an error.
pub fn find_applicable_rules(
    case_type: CaseType,
    from_court: CourtLevel,
    judgment_type: JudgmentType,
) -> Vec<&'static LimitationRule> {
    LIMITATION_RULES
        .iter()
        .filter(|rule| {
            rule.case_type == case_type
                && rule.from_court == from_court
                && rule.applicable_judgment_types.contains(&judgment_type)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_all_rules() {
        assert_eq!(LIMITATION_RULES.len(), 42);
    }

    #[test]
    fn rule_keys_do_not_overlap() {
        // No two rules may share (case_type, from_court, action, to_court)
        // with overlapping judgment-type applicability, or an option
        // would be double-counted.
        for (i, a) in LIMITATION_RULES.iter().enumerate() {
            for b in &LIMITATION_RULES[i + 1..] {
                let same_key = a.case_type == b.case_type
                    && a.from_court == b.from_court
                    && a.action == b.action
                    && a.to_court == b.to_court;
                if same_key {
                    let overlap = a
                        .applicable_judgment_types
                        .iter()
                        .any(|jt| b.applicable_judgment_types.contains(jt));
                    assert!(!overlap, "rules {} and {} overlap", a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn judgment_type_lists_are_non_empty() {
        for rule in LIMITATION_RULES {
            assert!(
                !rule.applicable_judgment_types.is_empty(),
                "rule {} has no judgment types",
                rule.id
            );
        }
    }

    #[test]
    fn every_court_with_rules_is_reachable_by_the_matcher() {
        // Any (case_type, from_court) pair present in the table must
        // produce at least one final-judgment match; otherwise a rule is
        // unreachable through the public entry point.
        for rule in LIMITATION_RULES {
            let matches =
                find_applicable_rules(rule.case_type, rule.from_court, JudgmentType::Final);
            assert!(
                !matches.is_empty(),
                "no final-judgment rules reachable for {:?}/{:?}",
                rule.case_type,
                rule.from_court
            );
        }
    }

    #[test]
    fn civil_district_final_matches_four_rules() {
        let rules =
            find_applicable_rules(CaseType::Civil, CourtLevel::DistrictCourt, JudgmentType::Final);
        let ids: Vec<_> = rules.iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                "civil_dc_appeal_hc",
                "civil_dc_review",
                "civil_dc_revision_hc",
                "civil_dc_execution"
            ]
        );
    }

    #[test]
    fn family_court_final_matches_three_rules() {
        let rules =
            find_applicable_rules(CaseType::Civil, CourtLevel::FamilyCourt, JudgmentType::Final);
        let ids: Vec<_> = rules.iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                "civil_family_appeal_hc",
                "civil_family_review",
                "civil_family_execution"
            ]
        );
        // The Family Courts Act overrides the standard 90-day appeal.
        assert_eq!(rules[0].limitation_days, 30);
    }

    #[test]
    fn senior_division_final_offers_both_appellate_forums() {
        // Below/above the pecuniary threshold: DC appeal (30d) and HC
        // appeal (90d) are both listed.
        let rules = find_applicable_rules(
            CaseType::Civil,
            CourtLevel::CivilJudgeSenior,
            JudgmentType::Final,
        );
        let ids: Vec<_> = rules.iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                "civil_cjsd_appeal_dc",
                "civil_cjsd_appeal_hc",
                "civil_cjsd_review",
                "civil_cjsd_revision_hc",
                "civil_cjsd_execution"
            ]
        );
    }

    #[test]
    fn consumer_district_appeal_reaches_the_state_commission() {
        let rules = find_applicable_rules(
            CaseType::Civil,
            CourtLevel::ConsumerDistrict,
            JudgmentType::Final,
        );
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].id, "civil_consumer_district_appeal_state");
        assert_eq!(rules[0].to_court, CourtLevel::ConsumerState);
        assert_eq!(rules[0].limitation_days, 45);
        assert_eq!(
            rules[0].to_court.display_name(),
            "State Consumer Disputes Redressal Commission"
        );
    }

    #[test]
    fn renumbered_criminal_citations_reference_bnss() {
        // CrPC sections renumbered by BNSS 2023 carry the updated
        // citation and the 1.1.0 version stamp.
        for id in [
            "criminal_jmfc_appeal_sessions",
            "criminal_cjm_appeal_sessions",
            "criminal_sessions_appeal_hc",
            "criminal_sessions_revision_hc",
            "criminal_hc_appeal_sc",
            "criminal_hc_review",
        ] {
            let rule = LIMITATION_RULES.iter().find(|r| r.id == id).unwrap();
            assert!(
                rule.law_reference.contains("BNSS 2023"),
                "rule {} still cites only the CrPC",
                id
            );
            assert_eq!(rule.version, "1.1.0", "rule {} not re-versioned", id);
        }
    }

    #[test]
    fn interim_judgment_excludes_final_only_rules() {
        let rules = find_applicable_rules(
            CaseType::Civil,
            CourtLevel::DistrictCourt,
            JudgmentType::Interim,
        );
        let ids: Vec<_> = rules.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["civil_dc_review", "civil_dc_revision_hc"]);
    }

    #[test]
    fn writ_in_district_court_matches_nothing() {
        // Writ petitions are not filed in district courts.
        let rules =
            find_applicable_rules(CaseType::Writ, CourtLevel::DistrictCourt, JudgmentType::Final);
        assert!(rules.is_empty());
    }
}
