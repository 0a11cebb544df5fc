//! Code lists referenced by subfield descriptors.
//!
//! The validation engine only needs to ask whether a code belongs to a list,
//! so the lists sit behind [`CodeListLookup`]. [`BundledCodeLists`] carries a
//! subset of the Library of Congress lists large enough for everyday records;
//! callers with complete lists plug in their own implementation.

use crate::schema::{code, Code};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifies an external code list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeListId {
    /// MARC Code List for Languages
    Languages,
    /// MARC Code List for Countries
    Countries,
    /// MARC Code List for Relators
    Relators,
    /// Subject Heading and Term Source Codes
    SubjectHeadingSources,
    /// Name and Title Authority Source Codes
    NameAndTitleAuthoritySources,
    /// Genre/Form Code and Term Source Codes
    GenreFormSources,
    /// Classification Scheme Source Codes
    ClassificationSources,
    /// Musical Incipit Scheme Source Codes
    MusicalIncipitSchemeSources,
    /// RDA content types (336 $b)
    ContentTypes,
    /// RDA media types (337 $b)
    MediaTypes,
    /// RDA carrier types (338 $b)
    CarrierTypes,
    /// Script identification codes used in `$6` linkage
    Scripts,
}

/// Lookup service for code list membership.
pub trait CodeListLookup: Send + Sync {
    /// Meaning of a code in a list, if the code belongs to it.
    fn lookup(&self, list: CodeListId, code: &str) -> Option<&'static str>;

    /// Whether a code belongs to a list.
    fn contains(&self, list: CodeListId, code: &str) -> bool {
        self.lookup(list, code).is_some()
    }
}

/// Code lists bundled with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCodeLists;

impl BundledCodeLists {
    /// Codes of one bundled list in declared order.
    #[must_use]
    pub fn codes(list: CodeListId) -> &'static [Code] {
        match list {
            CodeListId::Languages => LANGUAGES,
            CodeListId::Countries => COUNTRIES,
            CodeListId::Relators => RELATORS,
            CodeListId::SubjectHeadingSources => SUBJECT_HEADING_SOURCES,
            CodeListId::NameAndTitleAuthoritySources => NAME_AND_TITLE_SOURCES,
            CodeListId::GenreFormSources => GENRE_FORM_SOURCES,
            CodeListId::ClassificationSources => CLASSIFICATION_SOURCES,
            CodeListId::MusicalIncipitSchemeSources => MUSICAL_INCIPIT_SOURCES,
            CodeListId::ContentTypes => CONTENT_TYPES,
            CodeListId::MediaTypes => MEDIA_TYPES,
            CodeListId::CarrierTypes => CARRIER_TYPES,
            CodeListId::Scripts => SCRIPTS,
        }
    }
}

const ALL_LISTS: [CodeListId; 12] = [
    CodeListId::Languages,
    CodeListId::Countries,
    CodeListId::Relators,
    CodeListId::SubjectHeadingSources,
    CodeListId::NameAndTitleAuthoritySources,
    CodeListId::GenreFormSources,
    CodeListId::ClassificationSources,
    CodeListId::MusicalIncipitSchemeSources,
    CodeListId::ContentTypes,
    CodeListId::MediaTypes,
    CodeListId::CarrierTypes,
    CodeListId::Scripts,
];

lazy_static! {
    static ref INDEX: HashMap<CodeListId, HashMap<&'static str, &'static str>> = ALL_LISTS
        .iter()
        .map(|list| {
            let codes = BundledCodeLists::codes(*list)
                .iter()
                .map(|c| (c.code, c.label))
                .collect();
            (*list, codes)
        })
        .collect();
}

impl CodeListLookup for BundledCodeLists {
    fn lookup(&self, list: CodeListId, code: &str) -> Option<&'static str> {
        INDEX.get(&list).and_then(|codes| codes.get(code)).copied()
    }
}

const LANGUAGES: &[Code] = &[
    code("ara", "Arabic"),
    code("chi", "Chinese"),
    code("cze", "Czech"),
    code("dan", "Danish"),
    code("dut", "Dutch"),
    code("eng", "English"),
    code("fin", "Finnish"),
    code("fre", "French"),
    code("ger", "German"),
    code("gre", "Greek, Modern (1453- )"),
    code("grc", "Greek, Ancient (to 1453)"),
    code("heb", "Hebrew"),
    code("hun", "Hungarian"),
    code("ita", "Italian"),
    code("jpn", "Japanese"),
    code("kor", "Korean"),
    code("lat", "Latin"),
    code("mul", "Multiple languages"),
    code("nor", "Norwegian"),
    code("pol", "Polish"),
    code("por", "Portuguese"),
    code("rus", "Russian"),
    code("spa", "Spanish"),
    code("swe", "Swedish"),
    code("tur", "Turkish"),
    code("und", "Undetermined"),
    code("zxx", "No linguistic content"),
];

const COUNTRIES: &[Code] = &[
    code("at ", "Australia"),
    code("au ", "Austria"),
    code("be ", "Belgium"),
    code("cau", "California"),
    code("cc ", "China"),
    code("enk", "England"),
    code("fi ", "Finland"),
    code("fr ", "France"),
    code("gw ", "Germany"),
    code("hu ", "Hungary"),
    code("ilu", "Illinois"),
    code("it ", "Italy"),
    code("ja ", "Japan"),
    code("mau", "Massachusetts"),
    code("nyu", "New York (State)"),
    code("sp ", "Spain"),
    code("sz ", "Switzerland"),
    code("xx ", "No place, unknown, or undetermined"),
    code("xxu", "United States"),
];

const RELATORS: &[Code] = &[
    code("arr", "Arranger"),
    code("art", "Artist"),
    code("aut", "Author"),
    code("cmp", "Composer"),
    code("cnd", "Conductor"),
    code("ctb", "Contributor"),
    code("drt", "Director"),
    code("edt", "Editor"),
    code("ill", "Illustrator"),
    code("lbt", "Librettist"),
    code("lyr", "Lyricist"),
    code("pbl", "Publisher"),
    code("prf", "Performer"),
    code("pht", "Photographer"),
    code("prt", "Printer"),
    code("trl", "Translator"),
];

const SUBJECT_HEADING_SOURCES: &[Code] = &[
    code("aat", "Art & architecture thesaurus"),
    code("fast", "Faceted application of subject terminology"),
    code("gnd", "Gemeinsame Normdatei"),
    code("lcsh", "Library of Congress subject headings"),
    code("mesh", "Medical subject headings"),
    code("rvm", "Répertoire de vedettes-matière"),
    code("swd", "Schlagwortnormdatei"),
    code("tgn", "Getty thesaurus of geographic names"),
];

const NAME_AND_TITLE_SOURCES: &[Code] = &[
    code("gnd", "Gemeinsame Normdatei"),
    code("isni", "International Standard Name Identifier"),
    code("lcnaf", "Library of Congress name authority file"),
    code("orcid", "Open Researcher and Contributor ID"),
    code("viaf", "Virtual International Authority File"),
    code("wikidata", "Wikidata"),
];

const GENRE_FORM_SOURCES: &[Code] = &[
    code("aat", "Art & architecture thesaurus"),
    code("fast", "Faceted application of subject terminology"),
    code("gnd-content", "GND Inhaltstyp"),
    code("gsafd", "Guidelines on subject access to individual works of fiction, drama, etc."),
    code("lcgft", "Library of Congress genre/form terms"),
    code("rbgenr", "Genre terms: a thesaurus for use in rare book and special collections cataloguing"),
];

const CLASSIFICATION_SOURCES: &[Code] = &[
    code("bkl", "Basisklassifikation"),
    code("ddc", "Dewey decimal classification"),
    code("rvk", "Regensburger Verbundklassifikation"),
    code("sdnb", "DNB-Sachgruppen"),
    code("udc", "Universal decimal classification"),
];

const MUSICAL_INCIPIT_SOURCES: &[Code] = &[
    code("da", "Plaine and Easie Code"),
    code("mf", "MARC musical incipit format"),
    code("pe", "Plaine & Easie Code"),
];

const CONTENT_TYPES: &[Code] = &[
    code("cri", "cartographic image"),
    code("prm", "performed music"),
    code("snd", "sounds"),
    code("sti", "still image"),
    code("tdi", "two-dimensional moving image"),
    code("ntm", "notated music"),
    code("txt", "text"),
    code("cod", "computer dataset"),
];

const MEDIA_TYPES: &[Code] = &[
    code("c", "computer"),
    code("g", "projected"),
    code("h", "microform"),
    code("n", "unmediated"),
    code("s", "audio"),
    code("v", "video"),
    code("x", "other"),
    code("z", "unspecified"),
];

const CARRIER_TYPES: &[Code] = &[
    code("cr", "online resource"),
    code("cd", "computer disc"),
    code("he", "microfiche"),
    code("hd", "microfilm reel"),
    code("nb", "sheet"),
    code("nc", "volume"),
    code("sd", "audio disc"),
    code("vd", "videodisc"),
    code("zu", "unspecified"),
];

const SCRIPTS: &[Code] = &[
    code("(3", "Arabic"),
    code("(B", "Latin"),
    code("$1", "Chinese, Japanese, Korean"),
    code("(N", "Cyrillic"),
    code("(S", "Greek"),
    code("(2", "Hebrew"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_relator() {
        let lists = BundledCodeLists;
        assert_eq!(lists.lookup(CodeListId::Relators, "aut"), Some("Author"));
        assert!(!lists.contains(CodeListId::Relators, "xyz"));
    }

    #[test]
    fn test_same_code_in_two_lists() {
        let lists = BundledCodeLists;
        assert!(lists.contains(CodeListId::SubjectHeadingSources, "gnd"));
        assert!(lists.contains(CodeListId::NameAndTitleAuthoritySources, "gnd"));
        assert!(!lists.contains(CodeListId::Languages, "gnd"));
    }

    #[test]
    fn test_every_list_is_indexed() {
        for list in ALL_LISTS {
            let first = BundledCodeLists::codes(list)[0];
            assert!(BundledCodeLists.contains(list, first.code), "{list:?}");
        }
    }
}
