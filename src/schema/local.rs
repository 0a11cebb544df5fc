//! National and local extensions of the MARC 21 tag set.
//!
//! Each schema variant lists only what it adds or overrides; everything else
//! resolves to the standard table.

use crate::schema::{code, subfield, FieldDescriptor, IndicatorDescriptor, SchemaVersion, NR, R};

/// Descriptors a schema variant adds to or overrides in the standard table.
#[must_use]
pub fn fields_for(version: SchemaVersion) -> &'static [FieldDescriptor] {
    match version {
        SchemaVersion::Marc21 => &[],
        SchemaVersion::Dnb => DNB_FIELDS,
        SchemaVersion::Oclc => OCLC_FIELDS,
        SchemaVersion::Bl => BL_FIELDS,
    }
}

static DNB_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("924", "Bestandsinformationen", R).subfields(&[
        subfield('a', "Lokale IDN des Bestandsdatensatzes", NR),
        subfield('b', "International Standard Identifier for Libraries (ISIL)", NR),
        subfield('c', "Leihverkehrsregion", NR),
        subfield('d', "Fernleihindikator", NR),
        subfield('g', "Signatur", R),
        subfield('k', "Elektronische Adresse", R),
        subfield('z', "Allgemeine Bemerkung", R),
    ]),
];

static OCLC_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("029", "Other System Control Number", R)
        .ind1(IndicatorDescriptor::new(
            "Type of system control number",
            &[
                code("0", "OCLC member library"),
                code("1", "Other system"),
            ],
        ))
        .subfields(&[
            subfield('a', "OCLC library identifier", NR),
            subfield('b', "System control number", NR),
            subfield('c', "OAI set name", NR),
            subfield('t', "Content type identifier", NR),
        ]),
    FieldDescriptor::new("938", "Vendor-Specific Ordering Data", R).subfields(&[
        subfield('a', "Full name of vendor", NR),
        subfield('b', "Vendor/symbol code", NR),
        subfield('c', "Vendor-specific information", NR),
        subfield('i', "Internal vendor number", NR),
        subfield('n', "Control number", NR),
        subfield('s', "Status", NR),
    ]),
    FieldDescriptor::new("994", "OCLC-MARC Transaction Code", NR).subfields(&[
        subfield('a', "Transaction code", NR).codes(&[
            code("00", "No holdings set"),
            code("01", "Produce"),
            code("02", "Update holdings"),
            code("92", "Produce, no catalog cards"),
            code("C0", "Set holdings"),
            code("X0", "Set holdings, no output"),
        ]),
        subfield('b', "Institution symbol", NR),
    ]),
];

static BL_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("AQN", "Acquisitions Notes Field", R)
        .subfields(&[subfield('a', "Note", NR)])
        .obsolete(),
    FieldDescriptor::new("DRT", "Digital Resource Tag", NR)
        .subfields(&[subfield('a', "Digital resource type", NR)]),
    FieldDescriptor::new("FFP", "Flag for Printing", NR).subfields(&[subfield(
        'a',
        "Flag",
        NR,
    )
    .codes(&[code("Y", "Exclude from printed outputs")])]),
    FieldDescriptor::new("LDO", "LDO Information", NR).subfields(&[
        subfield('a', "LDO", NR),
        subfield('b', "Remainder", NR),
    ]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_version_adds_nothing() {
        assert!(fields_for(SchemaVersion::Marc21).is_empty());
    }

    #[test]
    fn test_variant_tags_are_unique() {
        for version in SchemaVersion::ALL {
            let mut tags: Vec<&str> = fields_for(version).iter().map(|f| f.tag).collect();
            let count = tags.len();
            tags.sort_unstable();
            tags.dedup();
            assert_eq!(tags.len(), count, "{version}");
        }
    }
}
