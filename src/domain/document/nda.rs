//! Non-disclosure agreement text between a brand and a creator.

use chrono::{NaiveDate, Utc};

use crate::template::{substitute, Variables};

/// Built-in NDA template.
///
/// Placeholders: `brandName`, `creatorName`, `term`, `date`.
pub const NDA_TEMPLATE: &str = "\
MUTUAL NON-DISCLOSURE AGREEMENT

This Non-Disclosure Agreement (the \"Agreement\") is entered into on {{date}} \
by and between {{brandName}} (the \"Brand\") and {{creatorName}} (the \"Creator\"), \
each a \"Party\" and together the \"Parties\".

1. Purpose. The Parties wish to explore a collaboration in which each may \
disclose Confidential Information to the other.

2. Confidential Information. \"Confidential Information\" means any non-public \
information disclosed by either Party, including campaign plans, product \
details, pricing, audience data and unreleased content.

3. Obligations. Each Party shall hold the other Party's Confidential \
Information in strict confidence, use it solely for the collaboration, and \
not disclose it to any third party without prior written consent.

4. Exclusions. These obligations do not apply to information that is or \
becomes public through no fault of the receiving Party, was known to it \
before disclosure, or is required to be disclosed by law.

5. Term. This Agreement remains in effect for {{term}} from the date above. \
Obligations regarding Confidential Information disclosed during the term \
survive its expiration.

6. Return of Materials. Upon request, each Party shall return or destroy all \
Confidential Information of the other Party.

IN WITNESS WHEREOF, the Parties have executed this Agreement as of {{date}}.

{{brandName}}
Signature: ______________________

{{creatorName}}
Signature: ______________________
";

/// Parties and term of an NDA.
#[derive(Debug, Clone)]
pub struct NdaInput {
    pub brand_name: String,
    pub creator_name: String,
    /// Free-form duration, e.g. "12 months"
    pub term: String,
}

/// US-English long date, e.g. "October 19, 2026".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Render the NDA dated today (UTC).
pub fn generate(input: &NdaInput) -> String {
    generate_on(input, Utc::now().date_naive())
}

/// Render the NDA for a given date.
pub fn generate_on(input: &NdaInput, date: NaiveDate) -> String {
    let mut variables = Variables::with_capacity(4);
    variables.insert("brandName".to_string(), input.brand_name.clone());
    variables.insert("creatorName".to_string(), input.creator_name.clone());
    variables.insert("term".to_string(), input.term.clone());
    variables.insert("date".to_string(), format_long_date(date));

    substitute(NDA_TEMPLATE, &variables)
}
