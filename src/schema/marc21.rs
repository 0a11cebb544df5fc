//! Bundled MARC 21 bibliographic data-field definitions.
//!
//! One literal per tag, in tag order. The order of [`FIELDS`] is the
//! declaration order used when serializing records.
//!
//! Reference: <https://www.loc.gov/marc/bibliographic/>

use crate::schema::code_lists::CodeListId;
use crate::schema::{
    code, subfield, Code, ContentGrammar, FieldDescriptor, IndicatorDescriptor,
    SubfieldDescriptor, NR, R,
};

const fn linkage() -> SubfieldDescriptor {
    subfield('6', "Linkage", NR).content(ContentGrammar::Linkage)
}

const fn field_link() -> SubfieldDescriptor {
    subfield('8', "Field link and sequence number", R)
}

const fn authority_number() -> SubfieldDescriptor {
    subfield('0', "Authority record control number or standard number", R)
        .content(ContentGrammar::RecordControlNumber)
}

const fn real_world_uri() -> SubfieldDescriptor {
    subfield('1', "Real World Object URI", R)
}

const fn relationship() -> SubfieldDescriptor {
    subfield('4', "Relationship", R).code_list(CodeListId::Relators)
}

const fn heading_source() -> SubfieldDescriptor {
    subfield('2', "Source of heading or term", NR).code_list(CodeListId::SubjectHeadingSources)
}

const fn name_source() -> SubfieldDescriptor {
    subfield('2', "Source of heading or term", NR)
        .code_list(CodeListId::NameAndTitleAuthoritySources)
}

const fn institution() -> SubfieldDescriptor {
    subfield('5', "Institution to which field applies", NR)
}

const fn uri() -> SubfieldDescriptor {
    subfield('u', "Uniform Resource Identifier", R)
}

const NO_INFO: Code = code(" ", "No information provided");

const NONFILING: &[Code] = &[
    code("0", "No nonfiling characters"),
    code("1", "Number of nonfiling characters"),
    code("2", "Number of nonfiling characters"),
    code("3", "Number of nonfiling characters"),
    code("4", "Number of nonfiling characters"),
    code("5", "Number of nonfiling characters"),
    code("6", "Number of nonfiling characters"),
    code("7", "Number of nonfiling characters"),
    code("8", "Number of nonfiling characters"),
    code("9", "Number of nonfiling characters"),
];

const PERSONAL_NAME_TYPE: &[Code] = &[
    code("0", "Forename"),
    code("1", "Surname"),
    code("3", "Family name"),
];

const CORPORATE_NAME_TYPE: &[Code] = &[
    code("0", "Inverted name"),
    code("1", "Jurisdiction name"),
    code("2", "Name in direct order"),
];

const THESAURUS: &[Code] = &[
    code("0", "Library of Congress Subject Headings"),
    code("1", "Library of Congress Children's and Young Adults' Subject Headings"),
    code("2", "Medical Subject Headings"),
    code("3", "National Agricultural Library subject authority file"),
    code("4", "Source not specified"),
    code("5", "Canadian Subject Headings"),
    code("6", "Répertoire de vedettes-matière"),
    code("7", "Source specified in subfield $2"),
];

const SUBJECT_LEVEL: &[Code] = &[
    NO_INFO,
    code("0", "No level specified"),
    code("1", "Primary"),
    code("2", "Secondary"),
];

const ADDED_ENTRY_TYPE: &[Code] = &[NO_INFO, code("2", "Analytical entry")];

const DISPLAY_CONSTANT: &[Code] = &[code("0", "Display note"), code("1", "Do not display note")];

const PUBLICATION_SEQUENCE: &[Code] = &[
    code(" ", "Not applicable/No information provided/Earliest"),
    code("2", "Intervening"),
    code("3", "Current/Latest"),
];

const ISBN_PATTERNS: &[&str] = &[r"^\d{9}[\dX](\s.*)?$", r"^97[89]\d{10}(\s.*)?$"];
const ISSN_PATTERNS: &[&str] = &[r"^\d{4}-\d{3}[\dX]$"];
const LCCN_PATTERNS: &[&str] = &[r"^[ a-z]{3}\d{8} ?$", r"^[ a-z]{2}\d{10}$"];
const DATE_PATTERNS: &[&str] = &[r"^\d{4}", r"^\[?\d{3}[-u?]\]?", r"^\[?c?\d{4}\??\]?"];

/// Standard MARC 21 bibliographic data fields, in declaration order.
pub static FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("010", "Library of Congress Control Number", NR).subfields(&[
        subfield('a', "LC control number", NR).content(ContentGrammar::Patterns(LCCN_PATTERNS)),
        subfield('b', "NUCMC control number", R),
        subfield('z', "Canceled/invalid LC control number", R),
        field_link(),
    ]),
    FieldDescriptor::new("015", "National Bibliography Number", R).subfields(&[
        subfield('a', "National bibliography number", R),
        subfield('q', "Qualifying information", R),
        subfield('z', "Canceled/invalid national bibliography number", R),
        subfield('2', "Source", NR),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("016", "National Bibliographic Agency Control Number", R)
        .ind1(IndicatorDescriptor::new(
            "National bibliographic agency",
            &[
                code(" ", "Library and Archives Canada"),
                code("7", "Source specified in subfield $2"),
            ],
        ))
        .subfields(&[
            subfield('a', "Record control number", NR),
            subfield('z', "Canceled/invalid control number", R),
            subfield('2', "Source", NR),
            field_link(),
        ]),
    FieldDescriptor::new("020", "International Standard Book Number", R).subfields(&[
        subfield('a', "International Standard Book Number", NR)
            .content(ContentGrammar::Patterns(ISBN_PATTERNS)),
        subfield('c', "Terms of availability", NR),
        subfield('q', "Qualifying information", R),
        subfield('z', "Canceled/invalid ISBN", R),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("022", "International Standard Serial Number", R)
        .ind1(IndicatorDescriptor::new(
            "Level of international interest",
            &[
                NO_INFO,
                code("0", "Continuing resource of international interest"),
                code("1", "Continuing resource not of international interest"),
            ],
        ))
        .subfields(&[
            subfield('a', "International Standard Serial Number", NR)
                .content(ContentGrammar::Patterns(ISSN_PATTERNS)),
            subfield('l', "ISSN-L", NR).content(ContentGrammar::Patterns(ISSN_PATTERNS)),
            subfield('m', "Canceled ISSN-L", R),
            subfield('y', "Incorrect ISSN", R),
            subfield('z', "Canceled ISSN", R),
            subfield('2', "Source", NR),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("024", "Other Standard Identifier", R)
        .ind1(IndicatorDescriptor::new(
            "Type of standard number or code",
            &[
                code("0", "International Standard Recording Code"),
                code("1", "Universal Product Code"),
                code("2", "International Standard Music Number"),
                code("3", "International Article Number"),
                code("4", "Serial Item and Contribution Identifier"),
                code("7", "Source specified in subfield $2"),
                code("8", "Unspecified type of standard number or code"),
            ],
        ))
        .ind2(IndicatorDescriptor::new(
            "Difference indicator",
            &[
                NO_INFO,
                code("0", "No difference"),
                code("1", "Difference"),
            ],
        ))
        .subfields(&[
            subfield('a', "Standard number or code", NR),
            subfield('c', "Terms of availability", NR),
            subfield('d', "Additional codes following the standard number or code", NR),
            subfield('q', "Qualifying information", R),
            subfield('z', "Canceled/invalid standard number or code", R),
            subfield('2', "Source of number or code", NR),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("031", "Musical Incipits Information", R).subfields(&[
        subfield('a', "Number of work", NR),
        subfield('b', "Number of movement", NR),
        subfield('c', "Number of excerpt", NR),
        subfield('d', "Caption or heading", R),
        subfield('e', "Role", NR),
        subfield('g', "Clef", NR),
        subfield('m', "Voice/instrument", NR),
        subfield('n', "Key signature", NR),
        subfield('o', "Time signature", NR),
        subfield('p', "Musical notation", NR),
        subfield('q', "General note", R),
        subfield('r', "Key or mode", NR),
        subfield('s', "Coded validity note", R).codes(&[
            code("?", "Mistake in the incipit that has not been corrected"),
            code("+", "Mistake in the incipit that has been corrected"),
            code("t", "Incipit has been transcribed"),
            code("!", "Incipit discrepancies commented on in subfield $q"),
        ]),
        subfield('t', "Text incipit", R),
        uri(),
        subfield('y', "Link text", R),
        subfield('z', "Public note", R),
        subfield('2', "System code", NR).code_list(CodeListId::MusicalIncipitSchemeSources),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("035", "System Control Number", R).subfields(&[
        subfield('a', "System control number", NR).content(ContentGrammar::RecordControlNumber),
        subfield('z', "Canceled/invalid control number", R),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("040", "Cataloging Source", NR).subfields(&[
        subfield('a', "Original cataloging agency", NR),
        subfield('b', "Language of cataloging", NR)
            .code_list(CodeListId::Languages)
            .length(3),
        subfield('c', "Transcribing agency", NR),
        subfield('d', "Modifying agency", R),
        subfield('e', "Description conventions", R),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("041", "Language Code", R)
        .ind1(IndicatorDescriptor::new(
            "Translation indication",
            &[
                NO_INFO,
                code("0", "Item not a translation/does not include a translation"),
                code("1", "Item is or includes a translation"),
            ],
        ))
        .ind2(IndicatorDescriptor::new(
            "Source of code",
            &[
                code(" ", "MARC language code"),
                code("7", "Source specified in subfield $2"),
            ],
        ))
        .subfields(&[
            subfield('a', "Language code of text/sound track or separate title", R)
                .code_list(CodeListId::Languages)
                .length(3),
            subfield('b', "Language code of summary or abstract", R)
                .code_list(CodeListId::Languages)
                .length(3),
            subfield('h', "Language code of original", R)
                .code_list(CodeListId::Languages)
                .length(3),
            subfield('2', "Source of code", NR),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("044", "Country of Publishing/Producing Entity Code", NR).subfields(&[
        subfield('a', "MARC country code", R).code_list(CodeListId::Countries),
        subfield('b', "Local subentity code", R),
        subfield('c', "ISO country code", R),
        subfield('2', "Source of local subentity code", R),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("050", "Library of Congress Call Number", R)
        .ind1(IndicatorDescriptor::new(
            "Existence in LC collection",
            &[
                NO_INFO,
                code("0", "Item is in LC"),
                code("1", "Item is not in LC"),
            ],
        ))
        .ind2(IndicatorDescriptor::new(
            "Source of call number",
            &[
                code("0", "Assigned by LC"),
                code("4", "Assigned by agency other than LC"),
            ],
        ))
        .subfields(&[
            subfield('a', "Classification number", R),
            subfield('b', "Item number", NR),
            subfield('0', "Authority record control number or standard number", R),
            subfield('1', "Real World Object URI", R),
            subfield('3', "Materials specified", NR),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("051", "Library of Congress Copy, Issue, Offprint Statement", R)
        .subfields(&[
            subfield('a', "Classification number", NR),
            subfield('b', "Item number", NR),
            subfield('c', "Copy information", NR),
            field_link(),
        ]),
    FieldDescriptor::new("061", "National Library of Medicine Copy Statement", R).subfields(&[
        subfield('a', "Classification number", R),
        subfield('b', "Item number", NR),
        subfield('c', "Copy information", NR),
        field_link(),
    ]),
    FieldDescriptor::new("080", "Universal Decimal Classification Number", R)
        .ind1(IndicatorDescriptor::new(
            "Type of edition",
            &[NO_INFO, code("0", "Full"), code("1", "Abridged")],
        ))
        .subfields(&[
            subfield('a', "Universal Decimal Classification number", NR),
            subfield('b', "Item number", NR),
            subfield('x', "Common auxiliary subdivision", R),
            subfield('2', "Edition identifier", NR),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("082", "Dewey Decimal Classification Number", R)
        .ind1(IndicatorDescriptor::new(
            "Type of edition",
            &[
                code("0", "Full edition"),
                code("1", "Abridged edition"),
                code("7", "Other edition specified in subfield $2"),
            ],
        ))
        .ind2(IndicatorDescriptor::new(
            "Source of classification number",
            &[
                NO_INFO,
                code("0", "Assigned by LC"),
                code("4", "Assigned by agency other than LC"),
            ],
        ))
        .subfields(&[
            subfield('a', "Classification number", R),
            subfield('b', "Item number", NR),
            subfield('m', "Standard or optional designation", NR)
                .codes(&[code("a", "Standard"), code("b", "Optional")]),
            subfield('q', "Assigning agency", NR),
            subfield('2', "Edition number", NR),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("084", "Other Classification Number", R).subfields(&[
        subfield('a', "Classification number", R),
        subfield('b', "Item number", NR),
        subfield('q', "Assigning agency", NR),
        subfield('2', "Number source", NR).code_list(CodeListId::ClassificationSources),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("100", "Main Entry - Personal Name", NR)
        .ind1(IndicatorDescriptor::new(
            "Type of personal name entry element",
            PERSONAL_NAME_TYPE,
        ))
        .subfields(&[
            subfield('a', "Personal name", NR),
            subfield('b', "Numeration", NR),
            subfield('c', "Titles and other words associated with a name", R),
            subfield('d', "Dates associated with a name", NR),
            subfield('e', "Relator term", R),
            subfield('f', "Date of a work", NR),
            subfield('g', "Miscellaneous information", R),
            subfield('j', "Attribution qualifier", R),
            subfield('k', "Form subheading", R),
            subfield('l', "Language of a work", NR),
            subfield('n', "Number of part/section of a work", R),
            subfield('p', "Name of part/section of a work", R),
            subfield('q', "Fuller form of name", NR),
            subfield('t', "Title of a work", NR),
            subfield('u', "Affiliation", NR),
            authority_number(),
            real_world_uri(),
            name_source(),
            relationship(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("110", "Main Entry - Corporate Name", NR)
        .ind1(IndicatorDescriptor::new(
            "Type of corporate name entry element",
            CORPORATE_NAME_TYPE,
        ))
        .subfields(&[
            subfield('a', "Corporate name or jurisdiction name as entry element", NR),
            subfield('b', "Subordinate unit", R),
            subfield('c', "Location of meeting", R),
            subfield('d', "Date of meeting or treaty signing", R),
            subfield('e', "Relator term", R),
            subfield('f', "Date of a work", NR),
            subfield('g', "Miscellaneous information", R),
            subfield('k', "Form subheading", R),
            subfield('l', "Language of a work", NR),
            subfield('n', "Number of part/section/meeting", R),
            subfield('p', "Name of part/section of a work", R),
            subfield('t', "Title of a work", NR),
            subfield('u', "Affiliation", NR),
            authority_number(),
            real_world_uri(),
            name_source(),
            relationship(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("111", "Main Entry - Meeting Name", NR)
        .ind1(IndicatorDescriptor::new(
            "Type of meeting name entry element",
            CORPORATE_NAME_TYPE,
        ))
        .subfields(&[
            subfield('a', "Meeting name or jurisdiction name as entry element", NR),
            subfield('c', "Location of meeting", R),
            subfield('d', "Date of meeting", NR),
            subfield('e', "Subordinate unit", R),
            subfield('f', "Date of a work", NR),
            subfield('g', "Miscellaneous information", R),
            subfield('j', "Relator term", R),
            subfield('k', "Form subheading", R),
            subfield('l', "Language of a work", NR),
            subfield('n', "Number of part/section/meeting", R),
            subfield('p', "Name of part/section of a work", R),
            subfield('q', "Name of meeting following jurisdiction name entry element", NR),
            subfield('t', "Title of a work", NR),
            subfield('u', "Affiliation", NR),
            authority_number(),
            name_source(),
            relationship(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("130", "Main Entry - Uniform Title", NR)
        .ind1(IndicatorDescriptor::new("Nonfiling characters", NONFILING))
        .subfields(&[
            subfield('a', "Uniform title", NR),
            subfield('d', "Date of treaty signing", R),
            subfield('f', "Date of a work", NR),
            subfield('g', "Miscellaneous information", R),
            subfield('k', "Form subheading", R),
            subfield('l', "Language of a work", NR),
            subfield('m', "Medium of performance for music", R),
            subfield('n', "Number of part/section of a work", R),
            subfield('o', "Arranged statement for music", NR),
            subfield('p', "Name of part/section of a work", R),
            subfield('r', "Key for music", NR),
            subfield('s', "Version", R),
            subfield('t', "Title of a work", NR),
            authority_number(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("240", "Uniform Title", NR)
        .ind1(IndicatorDescriptor::new(
            "Uniform title printed or displayed",
            &[
                code("0", "Not printed or displayed"),
                code("1", "Printed or displayed"),
            ],
        ))
        .ind2(IndicatorDescriptor::new("Nonfiling characters", NONFILING))
        .subfields(&[
            subfield('a', "Uniform title", NR),
            subfield('d', "Date of treaty signing", R),
            subfield('f', "Date of a work", NR),
            subfield('g', "Miscellaneous information", R),
            subfield('k', "Form subheading", R),
            subfield('l', "Language of a work", NR),
            subfield('m', "Medium of performance for music", R),
            subfield('n', "Number of part/section of a work", R),
            subfield('o', "Arranged statement for music", NR),
            subfield('p', "Name of part/section of a work", R),
            subfield('r', "Key for music", NR),
            subfield('s', "Version", R),
            authority_number(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("245", "Title Statement", NR)
        .ind1(IndicatorDescriptor::new(
            "Title added entry",
            &[code("0", "No added entry"), code("1", "Added entry")],
        ))
        .ind2(IndicatorDescriptor::new("Nonfiling characters", NONFILING))
        .subfields(&[
            subfield('a', "Title", NR),
            subfield('b', "Remainder of title", NR),
            subfield('c', "Statement of responsibility, etc.", NR),
            subfield('f', "Inclusive dates", NR),
            subfield('g', "Bulk dates", NR),
            subfield('h', "Medium", NR),
            subfield('k', "Form", R),
            subfield('n', "Number of part/section of a work", R),
            subfield('p', "Name of part/section of a work", R),
            subfield('s', "Version", NR),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("246", "Varying Form of Title", R)
        .ind1(IndicatorDescriptor::new(
            "Note/added entry controller",
            &[
                code("0", "Note, no added entry"),
                code("1", "Note, added entry"),
                code("2", "No note, no added entry"),
                code("3", "No note, added entry"),
            ],
        ))
        .ind2(IndicatorDescriptor::new(
            "Type of title",
            &[
                code(" ", "No type specified"),
                code("0", "Portion of title"),
                code("1", "Parallel title"),
                code("2", "Distinctive title"),
                code("3", "Other title"),
                code("4", "Cover title"),
                code("5", "Added title page title"),
                code("6", "Caption title"),
                code("7", "Running title"),
                code("8", "Spine title"),
            ],
        ))
        .subfields(&[
            subfield('a', "Title proper/short title", NR),
            subfield('b', "Remainder of title", NR),
            subfield('f', "Date or sequential designation", NR),
            subfield('g', "Miscellaneous information", R),
            subfield('h', "Medium", NR),
            subfield('i', "Display text", NR),
            subfield('n', "Number of part/section of a work", R),
            subfield('p', "Name of part/section of a work", R),
            institution(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("250", "Edition Statement", R).subfields(&[
        subfield('a', "Edition statement", NR),
        subfield('b', "Remainder of edition statement", NR),
        subfield('3', "Materials specified", NR),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("260", "Publication, Distribution, etc. (Imprint)", R)
        .ind1(IndicatorDescriptor::new(
            "Sequence of publishing statements",
            PUBLICATION_SEQUENCE,
        ))
        .subfields(&[
            subfield('a', "Place of publication, distribution, etc.", R),
            subfield('b', "Name of publisher, distributor, etc.", R),
            subfield('c', "Date of publication, distribution, etc.", R)
                .content(ContentGrammar::Patterns(DATE_PATTERNS)),
            subfield('e', "Place of manufacture", R),
            subfield('f', "Manufacturer", R),
            subfield('g', "Date of manufacture", R),
            subfield('3', "Materials specified", NR),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new(
        "264",
        "Production, Publication, Distribution, Manufacture, and Copyright Notice",
        R,
    )
    .ind1(IndicatorDescriptor::new(
        "Sequence of statements",
        PUBLICATION_SEQUENCE,
    ))
    .ind2(IndicatorDescriptor::new(
        "Function of entity",
        &[
            code("0", "Production"),
            code("1", "Publication"),
            code("2", "Distribution"),
            code("3", "Manufacture"),
            code("4", "Copyright notice date"),
        ],
    ))
    .subfields(&[
        subfield('a', "Place of production, publication, distribution, manufacture", R),
        subfield('b', "Name of producer, publisher, distributor, manufacturer", R),
        subfield('c', "Date of production, publication, distribution, manufacture, or copyright notice", R),
        subfield('3', "Materials specified", NR),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("300", "Physical Description", R).subfields(&[
        subfield('a', "Extent", R),
        subfield('b', "Other physical details", NR),
        subfield('c', "Dimensions", R),
        subfield('e', "Accompanying material", NR),
        subfield('f', "Type of unit", R),
        subfield('g', "Size of unit", R),
        subfield('3', "Materials specified", NR),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("336", "Content Type", R).subfields(&[
        subfield('a', "Content type term", R),
        subfield('b', "Content type code", R).code_list(CodeListId::ContentTypes),
        subfield('0', "Authority record control number", R),
        subfield('2', "Source", NR),
        subfield('3', "Materials specified", NR),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("337", "Media Type", R).subfields(&[
        subfield('a', "Media type term", R),
        subfield('b', "Media type code", R).code_list(CodeListId::MediaTypes),
        subfield('0', "Authority record control number", R),
        subfield('2', "Source", NR),
        subfield('3', "Materials specified", NR),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("338", "Carrier Type", R).subfields(&[
        subfield('a', "Carrier type term", R),
        subfield('b', "Carrier type code", R).code_list(CodeListId::CarrierTypes),
        subfield('0', "Authority record control number", R),
        subfield('2', "Source", NR),
        subfield('3', "Materials specified", NR),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("440", "Series Statement/Added Entry-Title", R)
        .ind2(IndicatorDescriptor::new("Nonfiling characters", NONFILING))
        .subfields(&[
            subfield('a', "Title", NR),
            subfield('n', "Number of part/section of a work", R),
            subfield('p', "Name of part/section of a work", R),
            subfield('v', "Volume number/sequential designation", NR),
            subfield('x', "International Standard Serial Number", NR),
            linkage(),
            field_link(),
        ])
        .obsolete(),
    FieldDescriptor::new("490", "Series Statement", R)
        .ind1(IndicatorDescriptor::new(
            "Series tracing policy",
            &[code("0", "Series not traced"), code("1", "Series traced")],
        ))
        .subfields(&[
            subfield('a', "Series statement", R),
            subfield('l', "Library of Congress call number", NR),
            subfield('v', "Volume/sequential designation", R),
            subfield('x', "International Standard Serial Number", R)
                .content(ContentGrammar::Patterns(ISSN_PATTERNS)),
            subfield('3', "Materials specified", NR),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("500", "General Note", R).subfields(&[
        subfield('a', "General note", NR),
        subfield('3', "Materials specified", NR),
        institution(),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("504", "Bibliography, Etc. Note", R).subfields(&[
        subfield('a', "Bibliography, etc. note", NR),
        subfield('b', "Number of references", NR),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("505", "Formatted Contents Note", R)
        .ind1(IndicatorDescriptor::new(
            "Display constant controller",
            &[
                code("0", "Contents"),
                code("1", "Incomplete contents"),
                code("2", "Partial contents"),
                code("8", "No display constant generated"),
            ],
        ))
        .ind2(IndicatorDescriptor::new(
            "Level of content designation",
            &[NO_INFO, code("0", "Enhanced")],
        ))
        .subfields(&[
            subfield('a', "Formatted contents note", NR),
            subfield('g', "Miscellaneous information", R),
            subfield('r', "Statement of responsibility", R),
            subfield('t', "Title", R),
            uri(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("520", "Summary, Etc.", R)
        .ind1(IndicatorDescriptor::new(
            "Display constant controller",
            &[
                code(" ", "Summary"),
                code("0", "Subject"),
                code("1", "Review"),
                code("2", "Scope and content"),
                code("3", "Abstract"),
                code("4", "Content advice"),
                code("8", "No display constant generated"),
            ],
        ))
        .subfields(&[
            subfield('a', "Summary, etc.", NR),
            subfield('b', "Expansion of summary note", NR),
            subfield('c', "Assigning source", NR),
            uri(),
            subfield('2', "Source", NR),
            subfield('3', "Materials specified", NR),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("546", "Language Note", R).subfields(&[
        subfield('a', "Language note", NR),
        subfield('b', "Information code or alphabet", R),
        subfield('3', "Materials specified", NR),
        linkage(),
        field_link(),
    ]),
    FieldDescriptor::new("588", "Source of Description Note", R)
        .ind1(IndicatorDescriptor::new(
            "Display constant controller",
            &[
                NO_INFO,
                code("0", "Source of description"),
                code("1", "Latest issue consulted"),
            ],
        ))
        .subfields(&[
            subfield('a', "Source of description note", NR),
            institution(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("600", "Subject Added Entry - Personal Name", R)
        .ind1(IndicatorDescriptor::new(
            "Type of personal name entry element",
            PERSONAL_NAME_TYPE,
        ))
        .ind2(IndicatorDescriptor::new("Thesaurus", THESAURUS))
        .subfields(&[
            subfield('a', "Personal name", NR),
            subfield('b', "Numeration", NR),
            subfield('c', "Titles and other words associated with a name", R),
            subfield('d', "Dates associated with a name", NR),
            subfield('e', "Relator term", R),
            subfield('q', "Fuller form of name", NR),
            subfield('t', "Title of a work", NR),
            subfield('v', "Form subdivision", R),
            subfield('x', "General subdivision", R),
            subfield('y', "Chronological subdivision", R),
            subfield('z', "Geographic subdivision", R),
            authority_number(),
            real_world_uri(),
            heading_source(),
            relationship(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("610", "Subject Added Entry - Corporate Name", R)
        .ind1(IndicatorDescriptor::new(
            "Type of corporate name entry element",
            CORPORATE_NAME_TYPE,
        ))
        .ind2(IndicatorDescriptor::new("Thesaurus", THESAURUS))
        .subfields(&[
            subfield('a', "Corporate name or jurisdiction name as entry element", NR),
            subfield('b', "Subordinate unit", R),
            subfield('t', "Title of a work", NR),
            subfield('v', "Form subdivision", R),
            subfield('x', "General subdivision", R),
            subfield('y', "Chronological subdivision", R),
            subfield('z', "Geographic subdivision", R),
            authority_number(),
            heading_source(),
            relationship(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("611", "Subject Added Entry - Meeting Name", R)
        .ind1(IndicatorDescriptor::new(
            "Type of meeting name entry element",
            CORPORATE_NAME_TYPE,
        ))
        .ind2(IndicatorDescriptor::new("Thesaurus", THESAURUS))
        .subfields(&[
            subfield('a', "Meeting name or jurisdiction name as entry element", NR),
            subfield('c', "Location of meeting", R),
            subfield('d', "Date of meeting", NR),
            subfield('v', "Form subdivision", R),
            subfield('x', "General subdivision", R),
            subfield('y', "Chronological subdivision", R),
            subfield('z', "Geographic subdivision", R),
            authority_number(),
            heading_source(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("630", "Subject Added Entry - Uniform Title", R)
        .ind1(IndicatorDescriptor::new("Nonfiling characters", NONFILING))
        .ind2(IndicatorDescriptor::new("Thesaurus", THESAURUS))
        .subfields(&[
            subfield('a', "Uniform title", NR),
            subfield('d', "Date of treaty signing", R),
            subfield('l', "Language of a work", NR),
            subfield('p', "Name of part/section of a work", R),
            subfield('v', "Form subdivision", R),
            subfield('x', "General subdivision", R),
            subfield('y', "Chronological subdivision", R),
            subfield('z', "Geographic subdivision", R),
            authority_number(),
            heading_source(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("650", "Subject Added Entry - Topical Term", R)
        .ind1(IndicatorDescriptor::new("Level of subject", SUBJECT_LEVEL))
        .ind2(IndicatorDescriptor::new("Thesaurus", THESAURUS))
        .subfields(&[
            subfield('a', "Topical term or geographic name entry element", NR),
            subfield('b', "Topical term following geographic name entry element", NR),
            subfield('c', "Location of event", NR),
            subfield('d', "Active dates", NR),
            subfield('e', "Relator term", R),
            subfield('g', "Miscellaneous information", R),
            subfield('v', "Form subdivision", R),
            subfield('x', "General subdivision", R),
            subfield('y', "Chronological subdivision", R),
            subfield('z', "Geographic subdivision", R),
            authority_number(),
            real_world_uri(),
            heading_source(),
            subfield('3', "Materials specified", NR),
            relationship(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("651", "Subject Added Entry - Geographic Name", R)
        .ind2(IndicatorDescriptor::new("Thesaurus", THESAURUS))
        .subfields(&[
            subfield('a', "Geographic name", NR),
            subfield('e', "Relator term", R),
            subfield('g', "Miscellaneous information", R),
            subfield('v', "Form subdivision", R),
            subfield('x', "General subdivision", R),
            subfield('y', "Chronological subdivision", R),
            subfield('z', "Geographic subdivision", R),
            authority_number(),
            real_world_uri(),
            heading_source(),
            relationship(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("655", "Index Term - Genre/Form", R)
        .ind1(IndicatorDescriptor::new(
            "Type of heading",
            &[code(" ", "Basic"), code("0", "Faceted")],
        ))
        .ind2(IndicatorDescriptor::new("Thesaurus", THESAURUS))
        .subfields(&[
            subfield('a', "Genre/form data or focus term", NR),
            subfield('b', "Non-focus term", R),
            subfield('c', "Facet/hierarchy designation", R),
            subfield('v', "Form subdivision", R),
            subfield('x', "General subdivision", R),
            subfield('y', "Chronological subdivision", R),
            subfield('z', "Geographic subdivision", R),
            authority_number(),
            subfield('2', "Source of term", NR).code_list(CodeListId::GenreFormSources),
            subfield('3', "Materials specified", NR),
            institution(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("700", "Added Entry - Personal Name", R)
        .ind1(IndicatorDescriptor::new(
            "Type of personal name entry element",
            PERSONAL_NAME_TYPE,
        ))
        .ind2(IndicatorDescriptor::new("Type of added entry", ADDED_ENTRY_TYPE))
        .subfields(&[
            subfield('a', "Personal name", NR),
            subfield('b', "Numeration", NR),
            subfield('c', "Titles and other words associated with a name", R),
            subfield('d', "Dates associated with a name", NR),
            subfield('e', "Relator term", R),
            subfield('f', "Date of a work", NR),
            subfield('i', "Relationship information", R),
            subfield('l', "Language of a work", NR),
            subfield('n', "Number of part/section of a work", R),
            subfield('p', "Name of part/section of a work", R),
            subfield('q', "Fuller form of name", NR),
            subfield('t', "Title of a work", NR),
            subfield('u', "Affiliation", NR),
            authority_number(),
            real_world_uri(),
            name_source(),
            relationship(),
            institution(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("710", "Added Entry - Corporate Name", R)
        .ind1(IndicatorDescriptor::new(
            "Type of corporate name entry element",
            CORPORATE_NAME_TYPE,
        ))
        .ind2(IndicatorDescriptor::new("Type of added entry", ADDED_ENTRY_TYPE))
        .subfields(&[
            subfield('a', "Corporate name or jurisdiction name as entry element", NR),
            subfield('b', "Subordinate unit", R),
            subfield('c', "Location of meeting", R),
            subfield('d', "Date of meeting or treaty signing", R),
            subfield('e', "Relator term", R),
            subfield('g', "Miscellaneous information", R),
            subfield('n', "Number of part/section/meeting", R),
            subfield('t', "Title of a work", NR),
            authority_number(),
            name_source(),
            relationship(),
            institution(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("711", "Added Entry - Meeting Name", R)
        .ind1(IndicatorDescriptor::new(
            "Type of meeting name entry element",
            CORPORATE_NAME_TYPE,
        ))
        .ind2(IndicatorDescriptor::new("Type of added entry", ADDED_ENTRY_TYPE))
        .subfields(&[
            subfield('a', "Meeting name or jurisdiction name as entry element", NR),
            subfield('c', "Location of meeting", R),
            subfield('d', "Date of meeting", NR),
            subfield('e', "Subordinate unit", R),
            subfield('n', "Number of part/section/meeting", R),
            subfield('t', "Title of a work", NR),
            authority_number(),
            name_source(),
            relationship(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("730", "Added Entry - Uniform Title", R)
        .ind1(IndicatorDescriptor::new("Nonfiling characters", NONFILING))
        .ind2(IndicatorDescriptor::new("Type of added entry", ADDED_ENTRY_TYPE))
        .subfields(&[
            subfield('a', "Uniform title", NR),
            subfield('d', "Date of treaty signing", R),
            subfield('f', "Date of a work", NR),
            subfield('i', "Relationship information", R),
            subfield('l', "Language of a work", NR),
            subfield('n', "Number of part/section of a work", R),
            subfield('p', "Name of part/section of a work", R),
            subfield('t', "Title of a work", NR),
            authority_number(),
            relationship(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("773", "Host Item Entry", R)
        .ind1(IndicatorDescriptor::new(
            "Note controller",
            &[code("0", "Display note"), code("1", "Do not display note")],
        ))
        .ind2(IndicatorDescriptor::new(
            "Display constant controller",
            &[code(" ", "In"), code("8", "No display constant generated")],
        ))
        .subfields(&[
            subfield('a', "Main entry heading", NR),
            subfield('b', "Edition", NR),
            subfield('d', "Place, publisher, and date of publication", NR),
            subfield('g', "Related parts", R),
            subfield('i', "Relationship information", R),
            subfield('q', "Enumeration and first page", NR),
            subfield('t', "Title", NR),
            subfield('w', "Record control number", R).content(ContentGrammar::RecordControlNumber),
            subfield('x', "International Standard Serial Number", NR)
                .content(ContentGrammar::Patterns(ISSN_PATTERNS)),
            subfield('z', "International Standard Book Number", R),
            linkage(),
            subfield('7', "Control subfield", NR),
            field_link(),
        ]),
    FieldDescriptor::new("776", "Additional Physical Form Entry", R)
        .ind1(IndicatorDescriptor::new("Note controller", DISPLAY_CONSTANT))
        .ind2(IndicatorDescriptor::new(
            "Display constant controller",
            &[
                code(" ", "Available in another form"),
                code("8", "No display constant generated"),
            ],
        ))
        .subfields(&[
            subfield('a', "Main entry heading", NR),
            subfield('c', "Qualifying information", NR),
            subfield('d', "Place, publisher, and date of publication", NR),
            subfield('i', "Relationship information", R),
            subfield('t', "Title", NR),
            subfield('w', "Record control number", R).content(ContentGrammar::RecordControlNumber),
            subfield('x', "International Standard Serial Number", NR),
            subfield('z', "International Standard Book Number", R),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("800", "Series Added Entry - Personal Name", R)
        .ind1(IndicatorDescriptor::new(
            "Type of personal name entry element",
            PERSONAL_NAME_TYPE,
        ))
        .subfields(&[
            subfield('a', "Personal name", NR),
            subfield('d', "Dates associated with a name", NR),
            subfield('t', "Title of a work", NR),
            subfield('v', "Volume/sequential designation", NR),
            authority_number(),
            relationship(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("830", "Series Added Entry - Uniform Title", R)
        .ind2(IndicatorDescriptor::new("Nonfiling characters", NONFILING))
        .subfields(&[
            subfield('a', "Uniform title", NR),
            subfield('l', "Language of a work", NR),
            subfield('n', "Number of part/section of a work", R),
            subfield('p', "Name of part/section of a work", R),
            subfield('v', "Volume/sequential designation", NR),
            subfield('w', "Bibliographic record control number", R)
                .content(ContentGrammar::RecordControlNumber),
            subfield('x', "International Standard Serial Number", NR)
                .content(ContentGrammar::Patterns(ISSN_PATTERNS)),
            authority_number(),
            institution(),
            linkage(),
            field_link(),
        ]),
    FieldDescriptor::new("856", "Electronic Location and Access", R)
        .ind1(IndicatorDescriptor::new(
            "Access method",
            &[
                NO_INFO,
                code("0", "Email"),
                code("1", "FTP"),
                code("2", "Remote login (Telnet)"),
                code("3", "Dial-up"),
                code("4", "HTTP"),
                code("7", "Method specified in subfield $2"),
            ],
        ))
        .ind2(IndicatorDescriptor::new(
            "Relationship",
            &[
                NO_INFO,
                code("0", "Resource"),
                code("1", "Version of resource"),
                code("2", "Related resource"),
                code("3", "Component part(s) of resource"),
                code("4", "Version of component part(s) of resource"),
                code("8", "No display constant generated"),
            ],
        ))
        .subfields(&[
            subfield('a', "Host name", R),
            subfield('q', "Electronic format type", NR),
            uri(),
            subfield('x', "Nonpublic note", R),
            subfield('y', "Link text", R),
            subfield('z', "Public note", R),
            subfield('2', "Access method", NR),
            subfield('3', "Materials specified", NR),
            linkage(),
            subfield('7', "Access status", NR).codes(&[
                code("0", "Open access"),
                code("1", "Restricted access"),
                code("u", "Unspecified"),
            ]),
            field_link(),
        ]),
    FieldDescriptor::new("880", "Alternate Graphic Representation", R).subfields(&[
        linkage(),
        subfield('a', "Same as associated field", R),
        subfield('b', "Same as associated field", R),
        subfield('c', "Same as associated field", R),
        subfield('d', "Same as associated field", R),
        subfield('e', "Same as associated field", R),
        subfield('f', "Same as associated field", R),
        subfield('g', "Same as associated field", R),
        subfield('n', "Same as associated field", R),
        subfield('p', "Same as associated field", R),
        subfield('q', "Same as associated field", R),
        subfield('t', "Same as associated field", R),
        subfield('v', "Same as associated field", R),
        subfield('x', "Same as associated field", R),
        subfield('0', "Same as associated field", R),
        subfield('2', "Same as associated field", R),
        subfield('4', "Same as associated field", R),
        field_link(),
    ]),
];
