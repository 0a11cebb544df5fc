//! Positional layouts of the fixed-length control fields.
//!
//! 008 layouts are keyed by [`MaterialType`]; [`MaterialType::AllMaterials`]
//! holds the positions every category shares. 006 reuses the 008/18-34
//! category positions shifted to 006/01-17. 007 layouts are keyed by
//! [`PhysicalDescription`].
//!
//! Reference: <https://www.loc.gov/marc/bibliographic/bd008.html>,
//! <https://www.loc.gov/marc/bibliographic/bd007.html>

use crate::control::{PhysicalDescription, PositionalAttribute};
use crate::leader::MaterialType;
use crate::schema::code_lists::CodeListId;
use crate::schema::{code, Code};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Offset between a 008 category position and the same position in 006.
pub const OFFSET_006: usize = 17;

/// Full length of 008.
pub const LENGTH_008: usize = 40;

/// Full length of 006.
pub const LENGTH_006: usize = 18;

const fn attr(id: &'static str, label: &'static str, start: usize, end: usize) -> PositionalAttribute {
    PositionalAttribute::new(id, label, start, end)
}

const NO_ATTEMPT: Code = code("|", "No attempt to code");

const TARGET_AUDIENCE: &[Code] = &[
    code(" ", "Unknown or not specified"),
    code("a", "Preschool"),
    code("b", "Primary"),
    code("c", "Pre-adolescent"),
    code("d", "Adolescent"),
    code("e", "Adult"),
    code("f", "Specialized"),
    code("g", "General"),
    code("j", "Juvenile"),
    NO_ATTEMPT,
];

const FORM_OF_ITEM: &[Code] = &[
    code(" ", "None of the following"),
    code("a", "Microfilm"),
    code("b", "Microfiche"),
    code("c", "Microopaque"),
    code("d", "Large print"),
    code("f", "Braille"),
    code("o", "Online"),
    code("q", "Direct electronic"),
    code("r", "Regular print reproduction"),
    code("s", "Electronic"),
    NO_ATTEMPT,
];

const GOVERNMENT_PUBLICATION: &[Code] = &[
    code(" ", "Not a government publication"),
    code("a", "Autonomous or semi-autonomous component"),
    code("c", "Multilocal"),
    code("f", "Federal/national"),
    code("i", "International intergovernmental"),
    code("l", "Local"),
    code("m", "Multistate"),
    code("o", "Government publication-level undetermined"),
    code("s", "State, provincial, territorial, dependent, etc."),
    code("u", "Unknown if item is government publication"),
    code("z", "Other"),
    NO_ATTEMPT,
];

const CONFERENCE_PUBLICATION: &[Code] = &[
    code("0", "Not a conference publication"),
    code("1", "Conference publication"),
    NO_ATTEMPT,
];

const INDEX: &[Code] = &[code("0", "No index"), code("1", "Index present"), NO_ATTEMPT];

const NATURE_OF_CONTENTS: &[Code] = &[
    code(" ", "No specified nature of contents"),
    code("a", "Abstracts/summaries"),
    code("b", "Bibliographies"),
    code("c", "Catalogs"),
    code("d", "Dictionaries"),
    code("e", "Encyclopedias"),
    code("f", "Handbooks"),
    code("g", "Legal articles"),
    code("i", "Indexes"),
    code("j", "Patent document"),
    code("k", "Discographies"),
    code("l", "Legislation"),
    code("m", "Theses"),
    code("n", "Surveys of literature in a subject area"),
    code("o", "Reviews"),
    code("p", "Programmed texts"),
    code("q", "Filmographies"),
    code("r", "Directories"),
    code("s", "Statistics"),
    code("t", "Technical reports"),
    code("u", "Standards/specifications"),
    code("v", "Legal cases and case notes"),
    code("w", "Law reports and digests"),
    code("y", "Yearbooks"),
    code("z", "Treaties"),
    code("2", "Offprints"),
    code("5", "Calendars"),
    code("6", "Comics/graphic novels"),
    NO_ATTEMPT,
];

const CONTINUING_NATURE: &[Code] = &[
    code(" ", "Not specified"),
    code("a", "Abstracts/summaries"),
    code("b", "Bibliographies"),
    code("c", "Catalogs"),
    code("d", "Dictionaries"),
    code("e", "Encyclopedias"),
    code("f", "Handbooks"),
    code("g", "Legal articles"),
    code("h", "Biography"),
    code("i", "Indexes"),
    code("k", "Discographies"),
    code("l", "Legislation"),
    code("m", "Theses"),
    code("n", "Surveys of literature in a subject area"),
    code("o", "Reviews"),
    code("p", "Programmed texts"),
    code("q", "Filmographies"),
    code("r", "Directories"),
    code("s", "Statistics"),
    code("t", "Technical reports"),
    code("u", "Standards/specifications"),
    code("v", "Legal cases and case notes"),
    code("w", "Law reports and digests"),
    code("y", "Yearbooks"),
    code("z", "Treaties"),
    code("5", "Calendars"),
    code("6", "Comics/graphic novels"),
    NO_ATTEMPT,
];

const TYPE_OF_MATERIAL: &[Code] = &[
    code("a", "Language material"),
    code("c", "Notated music"),
    code("d", "Manuscript notated music"),
    code("e", "Cartographic material"),
    code("f", "Manuscript cartographic material"),
    code("g", "Projected medium"),
    code("i", "Nonmusical sound recording"),
    code("j", "Musical sound recording"),
    code("k", "Two-dimensional nonprojectable graphic"),
    code("m", "Computer file/Electronic resource"),
    code("o", "Kit"),
    code("p", "Mixed materials"),
    code("r", "Three-dimensional artifact or naturally occurring object"),
    code("s", "Serial/Integrating resource"),
    code("t", "Manuscript language material"),
];

static ALL_MATERIALS: &[PositionalAttribute] = &[
    attr("dateEnteredOnFile", "Date entered on file", 0, 6).pattern(r"^\d{6}$"),
    attr("typeOfDate", "Type of date/Publication status", 6, 7).codes(&[
        code("b", "No dates given; B.C. date involved"),
        code("c", "Continuing resource currently published"),
        code("d", "Continuing resource ceased publication"),
        code("e", "Detailed date"),
        code("i", "Inclusive dates of collection"),
        code("k", "Range of years of bulk of collection"),
        code("m", "Multiple dates"),
        code("n", "Dates unknown"),
        code("p", "Date of distribution/release/issue and production/recording session when different"),
        code("q", "Questionable date"),
        code("r", "Reprint/reissue date and original date"),
        code("s", "Single known date/probable date"),
        code("t", "Publication date and copyright date"),
        code("u", "Continuing resource status unknown"),
        NO_ATTEMPT,
    ]),
    attr("date1", "Date 1", 7, 11),
    attr("date2", "Date 2", 11, 15),
    attr("placeOfPublication", "Place of publication, production, or execution", 15, 18)
        .code_list(CodeListId::Countries),
    attr("language", "Language", 35, 38)
        .codes(&[
            code("   ", "No information provided"),
            code("|||", "No attempt to code"),
        ])
        .code_list(CodeListId::Languages),
    attr("modifiedRecord", "Modified record", 38, 39).codes(&[
        code(" ", "Not modified"),
        code("d", "Dashed-on information omitted"),
        code("o", "Completely romanized/printed cards romanized"),
        code("r", "Completely romanized/printed cards in script"),
        code("s", "Shortened"),
        code("x", "Missing characters"),
        NO_ATTEMPT,
    ]),
    attr("catalogingSource", "Cataloging source", 39, 40).codes(&[
        code(" ", "National bibliographic agency"),
        code("c", "Cooperative cataloging program"),
        code("d", "Other"),
        code("u", "Unknown"),
        NO_ATTEMPT,
    ]),
];

static BOOKS: &[PositionalAttribute] = &[
    attr("illustrations", "Illustrations", 18, 22)
        .per_character()
        .codes(&[
            code(" ", "No illustrations"),
            code("a", "Illustrations"),
            code("b", "Maps"),
            code("c", "Portraits"),
            code("d", "Charts"),
            code("e", "Plans"),
            code("f", "Plates"),
            code("g", "Music"),
            code("h", "Facsimiles"),
            code("i", "Coats of arms"),
            code("j", "Genealogical tables"),
            code("k", "Forms"),
            code("l", "Samples"),
            code("m", "Phonodisc, phonowire, etc."),
            code("o", "Photographs"),
            code("p", "Illuminations"),
            NO_ATTEMPT,
        ]),
    attr("targetAudience", "Target audience", 22, 23).codes(TARGET_AUDIENCE),
    attr("formOfItem", "Form of item", 23, 24).codes(FORM_OF_ITEM),
    attr("natureOfContents", "Nature of contents", 24, 28)
        .per_character()
        .codes(NATURE_OF_CONTENTS),
    attr("governmentPublication", "Government publication", 28, 29).codes(GOVERNMENT_PUBLICATION),
    attr("conferencePublication", "Conference publication", 29, 30).codes(CONFERENCE_PUBLICATION),
    attr("festschrift", "Festschrift", 30, 31).codes(&[
        code("0", "Not a festschrift"),
        code("1", "Festschrift"),
        NO_ATTEMPT,
    ]),
    attr("index", "Index", 31, 32).codes(INDEX),
    attr("literaryForm", "Literary form", 33, 34).codes(&[
        code("0", "Not fiction (not further specified)"),
        code("1", "Fiction (not further specified)"),
        code("d", "Dramas"),
        code("e", "Essays"),
        code("f", "Novels"),
        code("h", "Humor, satires, etc."),
        code("i", "Letters"),
        code("j", "Short stories"),
        code("m", "Mixed forms"),
        code("p", "Poetry"),
        code("s", "Speeches"),
        code("u", "Unknown"),
        NO_ATTEMPT,
    ]),
    attr("biography", "Biography", 34, 35).codes(&[
        code(" ", "No biographical material"),
        code("a", "Autobiography"),
        code("b", "Individual biography"),
        code("c", "Collective biography"),
        code("d", "Contains biographical information"),
        NO_ATTEMPT,
    ]),
];

static COMPUTER_FILES: &[PositionalAttribute] = &[
    attr("targetAudience", "Target audience", 22, 23).codes(TARGET_AUDIENCE),
    attr("formOfItem", "Form of item", 23, 24).codes(&[
        code(" ", "Unknown or not specified"),
        code("o", "Online"),
        code("q", "Direct electronic"),
        NO_ATTEMPT,
    ]),
    attr("typeOfComputerFile", "Type of computer file", 26, 27).codes(&[
        code("a", "Numeric data"),
        code("b", "Computer program"),
        code("c", "Representational"),
        code("d", "Document"),
        code("e", "Bibliographic data"),
        code("f", "Font"),
        code("g", "Game"),
        code("h", "Sound"),
        code("i", "Interactive multimedia"),
        code("j", "Online system or service"),
        code("m", "Combination"),
        code("u", "Unknown"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("governmentPublication", "Government publication", 28, 29).codes(GOVERNMENT_PUBLICATION),
];

static MAPS: &[PositionalAttribute] = &[
    attr("relief", "Relief", 18, 22).per_character().codes(&[
        code(" ", "No relief shown"),
        code("a", "Contours"),
        code("b", "Shading"),
        code("c", "Gradient and bathymetric tints"),
        code("d", "Hachures"),
        code("e", "Bathymetry/soundings"),
        code("f", "Form lines"),
        code("g", "Spot heights"),
        code("i", "Pictorially"),
        code("j", "Land forms"),
        code("k", "Bathymetry/isolines"),
        code("m", "Rock drawings"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("projection", "Projection", 22, 24).codes(&[
        code("  ", "Projection not specified"),
        code("aa", "Aitoff"),
        code("ab", "Gnomic"),
        code("ac", "Lambert's azimuthal equal area"),
        code("ad", "Orthographic"),
        code("ae", "Azimuthal equidistant"),
        code("af", "Stereographic"),
        code("ag", "General vertical near-sided"),
        code("am", "Modified stereographic for Alaska"),
        code("an", "Chamberlin trimetric"),
        code("ap", "Polar stereographic"),
        code("au", "Azimuthal, specific type unknown"),
        code("az", "Azimuthal, other"),
        code("ba", "Gall"),
        code("bb", "Goode's homolographic"),
        code("bc", "Lambert's cylindrical equal area"),
        code("bd", "Mercator"),
        code("be", "Miller"),
        code("bf", "Mollweide"),
        code("bg", "Sinusoidal"),
        code("bh", "Transverse Mercator"),
        code("bi", "Gauss-Kruger"),
        code("bj", "Equirectangular"),
        code("bk", "Krovak"),
        code("bl", "Cassini-Soldner"),
        code("bo", "Oblique Mercator"),
        code("br", "Robinson"),
        code("bs", "Space oblique Mercator"),
        code("bu", "Cylindrical, specific type unknown"),
        code("bz", "Cylindrical, other"),
        code("ca", "Albers equal area"),
        code("cb", "Bonne"),
        code("cc", "Lambert's conformal conic"),
        code("ce", "Equidistant conic"),
        code("cp", "Polyconic"),
        code("cu", "Conic, specific type unknown"),
        code("cz", "Conic, other"),
        code("da", "Armadillo"),
        code("db", "Butterfly"),
        code("dc", "Eckert"),
        code("dd", "Goode's homolosine"),
        code("de", "Miller's bipolar oblique conformal conic"),
        code("df", "Van Der Grinten"),
        code("dg", "Dimaxion"),
        code("dh", "Cordiform"),
        code("dl", "Lambert conformal"),
        code("zz", "Other"),
        code("||", "No attempt to code"),
    ]),
    attr("typeOfCartographicMaterial", "Type of cartographic material", 25, 26).codes(&[
        code("a", "Single map"),
        code("b", "Map series"),
        code("c", "Map serial"),
        code("d", "Globe"),
        code("e", "Atlas"),
        code("f", "Separate supplement to another work"),
        code("g", "Bound as part of another work"),
        code("u", "Unknown"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("governmentPublication", "Government publication", 28, 29).codes(GOVERNMENT_PUBLICATION),
    attr("formOfItem", "Form of item", 29, 30).codes(FORM_OF_ITEM),
    attr("index", "Index", 31, 32).codes(INDEX),
    attr("specialFormatCharacteristics", "Special format characteristics", 33, 35)
        .per_character()
        .codes(&[
            code(" ", "No specified special format characteristics"),
            code("e", "Manuscript"),
            code("j", "Picture card, post card"),
            code("k", "Calendar"),
            code("l", "Puzzle"),
            code("n", "Game"),
            code("o", "Wall map"),
            code("p", "Playing cards"),
            code("r", "Loose-leaf"),
            code("z", "Other"),
            NO_ATTEMPT,
        ]),
];

static MUSIC: &[PositionalAttribute] = &[
    attr("formOfComposition", "Form of composition", 18, 20).codes(&[
        code("an", "Anthems"),
        code("bd", "Ballads"),
        code("bg", "Bluegrass music"),
        code("bl", "Blues"),
        code("bt", "Ballets"),
        code("ca", "Chaconnes"),
        code("cb", "Chants, Other religions"),
        code("cc", "Chant, Christian"),
        code("cg", "Concerti grossi"),
        code("ch", "Chorales"),
        code("cl", "Chorale preludes"),
        code("cn", "Canons and rounds"),
        code("co", "Concertos"),
        code("cp", "Chansons, polyphonic"),
        code("cr", "Carols"),
        code("cs", "Chance compositions"),
        code("ct", "Cantatas"),
        code("cy", "Country music"),
        code("cz", "Canzonas"),
        code("df", "Dance forms"),
        code("dv", "Divertimentos, serenades, cassations, divertissements, and notturni"),
        code("fg", "Fugues"),
        code("fl", "Flamenco"),
        code("fm", "Folk music"),
        code("ft", "Fantasias"),
        code("gm", "Gospel music"),
        code("hy", "Hymns"),
        code("jz", "Jazz"),
        code("mc", "Musical revues and comedies"),
        code("md", "Madrigals"),
        code("mi", "Minuets"),
        code("mo", "Motets"),
        code("mp", "Motion picture music"),
        code("mr", "Marches"),
        code("ms", "Masses"),
        code("mu", "Multiple forms"),
        code("mz", "Mazurkas"),
        code("nc", "Nocturnes"),
        code("nn", "Not applicable"),
        code("op", "Operas"),
        code("or", "Oratorios"),
        code("ov", "Overtures"),
        code("pg", "Program music"),
        code("pm", "Passion music"),
        code("po", "Polonaises"),
        code("pp", "Popular music"),
        code("pr", "Preludes"),
        code("ps", "Passacaglias"),
        code("pt", "Part-songs"),
        code("pv", "Pavans"),
        code("rc", "Rock music"),
        code("rd", "Rondos"),
        code("rg", "Ragtime music"),
        code("ri", "Ricercars"),
        code("rp", "Rhapsodies"),
        code("rq", "Requiems"),
        code("sd", "Square dance music"),
        code("sg", "Songs"),
        code("sn", "Sonatas"),
        code("sp", "Symphonic poems"),
        code("st", "Studies and exercises"),
        code("su", "Suites"),
        code("sy", "Symphonies"),
        code("tc", "Toccatas"),
        code("tl", "Teatro lirico"),
        code("ts", "Trio-sonatas"),
        code("uu", "Unknown"),
        code("vi", "Villancicos"),
        code("vr", "Variations"),
        code("wz", "Waltzes"),
        code("za", "Zarzuelas"),
        code("zz", "Other"),
        code("||", "No attempt to code"),
    ]),
    attr("formatOfMusic", "Format of music", 20, 21).codes(&[
        code("a", "Full score"),
        code("b", "Miniature or study score"),
        code("c", "Accompaniment reduced for keyboard"),
        code("d", "Voice score with accompaniment omitted"),
        code("e", "Condensed score or piano-conductor score"),
        code("g", "Close score"),
        code("h", "Chorus score"),
        code("i", "Condensed score"),
        code("j", "Performer-conductor part"),
        code("k", "Vocal score"),
        code("l", "Score"),
        code("m", "Multiple score formats"),
        code("n", "Not applicable"),
        code("p", "Piano score"),
        code("u", "Unknown"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("musicParts", "Music parts", 21, 22).codes(&[
        code(" ", "No parts in hand or not specified"),
        code("d", "Instrumental and vocal parts"),
        code("e", "Instrumental parts"),
        code("f", "Vocal parts"),
        code("n", "Not applicable"),
        code("u", "Unknown"),
        NO_ATTEMPT,
    ]),
    attr("targetAudience", "Target audience", 22, 23).codes(TARGET_AUDIENCE),
    attr("formOfItem", "Form of item", 23, 24).codes(FORM_OF_ITEM),
    attr("accompanyingMatter", "Accompanying matter", 24, 30)
        .per_character()
        .codes(&[
            code(" ", "No accompanying matter"),
            code("a", "Discography"),
            code("b", "Bibliography"),
            code("c", "Thematic index"),
            code("d", "Libretto or text"),
            code("e", "Biography of composer or author"),
            code("f", "Biography of performer or history of ensemble"),
            code("g", "Technical and/or historical information on instruments"),
            code("h", "Technical information on music"),
            code("i", "Historical information"),
            code("k", "Ethnological information"),
            code("r", "Instructional materials"),
            code("s", "Music"),
            code("z", "Other"),
            NO_ATTEMPT,
        ]),
    attr("literaryText", "Literary text for sound recordings", 30, 32)
        .per_character()
        .codes(&[
            code(" ", "Item is a music sound recording"),
            code("a", "Autobiography"),
            code("b", "Biography"),
            code("c", "Conference proceedings"),
            code("d", "Drama"),
            code("e", "Essays"),
            code("f", "Fiction"),
            code("g", "Reporting"),
            code("h", "History"),
            code("i", "Instruction"),
            code("j", "Language instruction"),
            code("k", "Comedy"),
            code("l", "Lectures, speeches"),
            code("m", "Memoirs"),
            code("n", "Not applicable"),
            code("o", "Folktales"),
            code("p", "Poetry"),
            code("r", "Rehearsals"),
            code("s", "Sounds"),
            code("t", "Interviews"),
            code("z", "Other"),
            NO_ATTEMPT,
        ]),
    attr("transpositionAndArrangement", "Transposition and arrangement", 33, 34).codes(&[
        code(" ", "Not arrangement or transposition or not specified"),
        code("a", "Transposition"),
        code("b", "Arrangement"),
        code("c", "Both transposed and arranged"),
        code("n", "Not applicable"),
        code("u", "Unknown"),
        NO_ATTEMPT,
    ]),
];

static CONTINUING_RESOURCES: &[PositionalAttribute] = &[
    attr("frequency", "Frequency", 18, 19).codes(&[
        code(" ", "No determinable frequency"),
        code("a", "Annual"),
        code("b", "Bimonthly"),
        code("c", "Semiweekly"),
        code("d", "Daily"),
        code("e", "Biweekly"),
        code("f", "Semiannual"),
        code("g", "Biennial"),
        code("h", "Triennial"),
        code("i", "Three times a week"),
        code("j", "Three times a month"),
        code("k", "Continuously updated"),
        code("m", "Monthly"),
        code("q", "Quarterly"),
        code("s", "Semimonthly"),
        code("t", "Three times a year"),
        code("u", "Unknown"),
        code("w", "Weekly"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("regularity", "Regularity", 19, 20).codes(&[
        code("n", "Normalized irregular"),
        code("r", "Regular"),
        code("u", "Unknown"),
        code("x", "Completely irregular"),
        NO_ATTEMPT,
    ]),
    attr("typeOfContinuingResource", "Type of continuing resource", 21, 22).codes(&[
        code(" ", "None of the following"),
        code("d", "Updating database"),
        code("g", "Magazine"),
        code("h", "Blog"),
        code("j", "Journal"),
        code("l", "Updating loose-leaf"),
        code("m", "Monographic series"),
        code("n", "Newspaper"),
        code("p", "Periodical"),
        code("r", "Repository"),
        code("s", "Newsletter"),
        code("t", "Directory"),
        code("w", "Updating Web site"),
        NO_ATTEMPT,
    ]),
    attr("formOfOriginalItem", "Form of original item", 22, 23).codes(&[
        code(" ", "None of the following"),
        code("a", "Microfilm"),
        code("b", "Microfiche"),
        code("c", "Microopaque"),
        code("d", "Large print"),
        code("e", "Newspaper format"),
        code("f", "Braille"),
        code("o", "Online"),
        code("q", "Direct electronic"),
        code("s", "Electronic"),
        NO_ATTEMPT,
    ]),
    attr("formOfItem", "Form of item", 23, 24).codes(FORM_OF_ITEM),
    attr("natureOfEntireWork", "Nature of entire work", 24, 25).codes(CONTINUING_NATURE),
    attr("natureOfContents", "Nature of contents", 25, 28)
        .per_character()
        .codes(CONTINUING_NATURE),
    attr("governmentPublication", "Government publication", 28, 29).codes(GOVERNMENT_PUBLICATION),
    attr("conferencePublication", "Conference publication", 29, 30).codes(CONFERENCE_PUBLICATION),
    attr("originalAlphabet", "Original alphabet or script of title", 33, 34).codes(&[
        code(" ", "No alphabet or script given/No key title"),
        code("a", "Basic Roman"),
        code("b", "Extended Roman"),
        code("c", "Cyrillic"),
        code("d", "Japanese"),
        code("e", "Chinese"),
        code("f", "Arabic"),
        code("g", "Greek"),
        code("h", "Hebrew"),
        code("i", "Thai"),
        code("j", "Devanagari"),
        code("k", "Korean"),
        code("l", "Tamil"),
        code("u", "Unknown"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("entryConvention", "Entry convention", 34, 35).codes(&[
        code("0", "Successive entry"),
        code("1", "Latest entry"),
        code("2", "Integrated entry"),
        NO_ATTEMPT,
    ]),
];

static VISUAL_MATERIALS: &[PositionalAttribute] = &[
    attr("runningTime", "Running time for motion pictures and videorecordings", 18, 21)
        .codes(&[
            code("000", "Running time exceeds three characters"),
            code("nnn", "Not applicable"),
            code("---", "Unknown"),
            code("|||", "No attempt to code"),
        ])
        .pattern(r"^\d{3}$"),
    attr("targetAudience", "Target audience", 22, 23).codes(TARGET_AUDIENCE),
    attr("governmentPublication", "Government publication", 28, 29).codes(GOVERNMENT_PUBLICATION),
    attr("formOfItem", "Form of item", 29, 30).codes(FORM_OF_ITEM),
    attr("typeOfVisualMaterial", "Type of visual material", 33, 34).codes(&[
        code("a", "Art original"),
        code("b", "Kit"),
        code("c", "Art reproduction"),
        code("d", "Diorama"),
        code("f", "Filmstrip"),
        code("g", "Game"),
        code("i", "Picture"),
        code("k", "Graphic"),
        code("l", "Technical drawing"),
        code("m", "Motion picture"),
        code("n", "Chart"),
        code("o", "Flash card"),
        code("p", "Microscope slide"),
        code("q", "Model"),
        code("r", "Realia"),
        code("s", "Slide"),
        code("t", "Transparency"),
        code("v", "Videorecording"),
        code("w", "Toy"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("technique", "Technique", 34, 35).codes(&[
        code("a", "Animation"),
        code("c", "Animation and live action"),
        code("l", "Live action"),
        code("n", "Not applicable"),
        code("u", "Unknown"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
];

static MIXED_MATERIALS: &[PositionalAttribute] =
    &[attr("formOfItem", "Form of item", 23, 24).codes(FORM_OF_ITEM)];

static FORM_OF_MATERIAL_006: PositionalAttribute =
    attr("formOfMaterial", "Form of material", 0, 1).codes(TYPE_OF_MATERIAL);

/// Category-specific 008 positions, without the shared ones.
#[must_use]
pub fn category_attributes(category: MaterialType) -> &'static [PositionalAttribute] {
    match category {
        MaterialType::AllMaterials => ALL_MATERIALS,
        MaterialType::Books => BOOKS,
        MaterialType::ComputerFiles => COMPUTER_FILES,
        MaterialType::Maps => MAPS,
        MaterialType::Music => MUSIC,
        MaterialType::ContinuingResources => CONTINUING_RESOURCES,
        MaterialType::VisualMaterials => VISUAL_MATERIALS,
        MaterialType::MixedMaterials => MIXED_MATERIALS,
    }
}

fn overlaps(a: &PositionalAttribute, b: &PositionalAttribute) -> bool {
    a.start < b.end && b.start < a.end
}

fn merge_008(category: MaterialType) -> Vec<PositionalAttribute> {
    let specific = category_attributes(category);
    let mut merged: Vec<PositionalAttribute> = ALL_MATERIALS
        .iter()
        .filter(|shared| !specific.iter().any(|s| overlaps(s, shared)))
        .chain(specific.iter())
        .copied()
        .collect();
    merged.sort_by_key(|a| a.start);
    merged
}

fn shift_006(category: MaterialType) -> Vec<PositionalAttribute> {
    std::iter::once(FORM_OF_MATERIAL_006)
        .chain(
            category_attributes(category)
                .iter()
                .map(|a| a.shifted(OFFSET_006)),
        )
        .collect()
}

lazy_static! {
    static ref LAYOUTS_008: HashMap<MaterialType, Vec<PositionalAttribute>> =
        std::iter::once(MaterialType::AllMaterials)
            .chain(MaterialType::CONCRETE)
            .map(|category| (category, merge_008(category)))
            .collect();
    static ref LAYOUTS_006: HashMap<MaterialType, Vec<PositionalAttribute>> = MaterialType::CONCRETE
        .into_iter()
        .map(|category| (category, shift_006(category)))
        .collect();
}

/// Merged 008 layout for a category, ordered by start position.
///
/// The shared positions are included unless a category position overlaps
/// them.
#[must_use]
pub fn layout_008(category: MaterialType) -> &'static [PositionalAttribute] {
    LAYOUTS_008.get(&category).map_or(&[], Vec::as_slice)
}

/// 006 layout for a category: 006/00 followed by the shifted category
/// positions.
#[must_use]
pub fn layout_006(category: MaterialType) -> &'static [PositionalAttribute] {
    LAYOUTS_006.get(&category).map_or(&[], Vec::as_slice)
}

/// The 006/00 attribute alone, used when 006/00 names no known category.
#[must_use]
pub fn form_of_material_006() -> &'static PositionalAttribute {
    &FORM_OF_MATERIAL_006
}

const CATEGORY_OF_MATERIAL: &[Code] = &[
    code("a", "Map"),
    code("c", "Electronic resource"),
    code("d", "Globe"),
    code("f", "Tactile material"),
    code("g", "Projected graphic"),
    code("h", "Microform"),
    code("k", "Nonprojected graphic"),
    code("m", "Motion picture"),
    code("o", "Kit"),
    code("q", "Notated music"),
    code("r", "Remote-sensing image"),
    code("s", "Sound recording"),
    code("t", "Text"),
    code("v", "Videorecording"),
    code("z", "Unspecified"),
];

const fn category_of_material() -> PositionalAttribute {
    attr("categoryOfMaterial", "Category of material", 0, 1).codes(CATEGORY_OF_MATERIAL)
}

const fn designation(codes: &'static [Code]) -> PositionalAttribute {
    attr("specificMaterialDesignation", "Specific material designation", 1, 2).codes(codes)
}

const COLOR_BASIC: &[Code] = &[
    code("a", "One color"),
    code("c", "Multicolored"),
    NO_ATTEMPT,
];

const COLOR_GRAPHIC: &[Code] = &[
    code("a", "One color"),
    code("b", "Black-and-white"),
    code("c", "Multicolored"),
    code("h", "Hand colored"),
    code("m", "Mixed"),
    code("u", "Unknown"),
    code("z", "Other"),
    NO_ATTEMPT,
];

const SOUND_ON_MEDIUM: &[Code] = &[
    code(" ", "No sound (silent)"),
    code("a", "Sound on medium"),
    code("b", "Sound separate from medium"),
    code("u", "Unknown"),
    NO_ATTEMPT,
];

const UNSPECIFIED_DESIGNATION: &[Code] = &[
    code("m", "Multiple physical forms"),
    code("u", "Unspecified"),
    code("z", "Other"),
    NO_ATTEMPT,
];

static MAP_007: &[PositionalAttribute] = &[
    category_of_material(),
    designation(&[
        code("d", "Atlas"),
        code("g", "Diagram"),
        code("j", "Map"),
        code("k", "Profile"),
        code("q", "Model"),
        code("r", "Remote-sensing image"),
        code("s", "Section"),
        code("u", "Unspecified"),
        code("y", "View"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("color", "Color", 3, 4).codes(COLOR_BASIC),
    attr("physicalMedium", "Physical medium", 4, 5).codes(&[
        code("a", "Paper"),
        code("b", "Wood"),
        code("c", "Stone"),
        code("d", "Metal"),
        code("e", "Synthetic"),
        code("f", "Skin"),
        code("g", "Textiles"),
        code("i", "Plastic"),
        code("j", "Glass"),
        code("l", "Vinyl"),
        code("n", "Vellum"),
        code("p", "Plaster"),
        code("q", "Flexible base photographic, positive"),
        code("r", "Flexible base photographic, negative"),
        code("s", "Non-flexible base photographic, positive"),
        code("t", "Non-flexible base photographic, negative"),
        code("u", "Unknown"),
        code("v", "Leather"),
        code("w", "Parchment"),
        code("x", "Not applicable"),
        code("y", "Other photographic medium"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("typeOfReproduction", "Type of reproduction", 5, 6).codes(&[
        code("f", "Facsimile"),
        code("n", "Not applicable"),
        code("u", "Unknown"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("productionDetails", "Production/reproduction details", 6, 7).codes(&[
        code("a", "Photocopy, blueline print"),
        code("b", "Photocopy"),
        code("c", "Pre-production"),
        code("d", "Film"),
        code("u", "Unknown"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("positiveNegative", "Positive/negative aspect", 7, 8).codes(&[
        code("a", "Positive"),
        code("b", "Negative"),
        code("m", "Mixed polarity"),
        code("n", "Not applicable"),
        NO_ATTEMPT,
    ]),
];

static ELECTRONIC_RESOURCE_007: &[PositionalAttribute] = &[
    category_of_material(),
    designation(&[
        code("a", "Tape cartridge"),
        code("b", "Chip cartridge"),
        code("c", "Computer optical disc cartridge"),
        code("d", "Computer disc, type unspecified"),
        code("e", "Computer disc cartridge, type unspecified"),
        code("f", "Tape cassette"),
        code("h", "Tape reel"),
        code("j", "Magnetic disk"),
        code("k", "Computer card"),
        code("m", "Magneto-optical disc"),
        code("o", "Optical disc"),
        code("r", "Remote"),
        code("s", "Standalone device"),
        code("u", "Unspecified"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("color", "Color", 3, 4).codes(&[
        code("a", "One color"),
        code("b", "Black-and-white"),
        code("c", "Multicolored"),
        code("g", "Gray scale"),
        code("m", "Mixed"),
        code("n", "Not applicable"),
        code("u", "Unknown"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("dimensions", "Dimensions", 4, 5).codes(&[
        code("a", "3 1/2 in."),
        code("e", "12 in."),
        code("g", "4 3/4 in. or 12 cm."),
        code("i", "1 1/8 x 2 3/8 in."),
        code("j", "3 7/8 x 2 1/2 in."),
        code("n", "Not applicable"),
        code("o", "5 1/4 in."),
        code("u", "Unknown"),
        code("v", "8 in."),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("sound", "Sound", 5, 6).codes(&[
        code(" ", "No sound (silent)"),
        code("a", "Sound"),
        code("u", "Unknown"),
        NO_ATTEMPT,
    ]),
    attr("imageBitDepth", "Image bit depth", 6, 9)
        .codes(&[
            code("mmm", "Multiple"),
            code("nnn", "Not applicable"),
            code("---", "Unknown"),
            code("|||", "No attempt to code"),
        ])
        .pattern(r"^\d{3}$"),
    attr("fileFormats", "File formats", 9, 10).codes(&[
        code("a", "One file format"),
        code("m", "Multiple file formats"),
        code("u", "Unknown"),
        NO_ATTEMPT,
    ]),
    attr("qualityAssurance", "Quality assurance target(s)", 10, 11).codes(&[
        code("a", "Absent"),
        code("n", "Not applicable"),
        code("p", "Present"),
        code("u", "Unknown"),
        NO_ATTEMPT,
    ]),
    attr("antecedentSource", "Antecedent/source", 11, 12).codes(&[
        code("a", "File reproduced from original"),
        code("b", "File reproduced from microform"),
        code("c", "File reproduced from an electronic resource"),
        code("d", "File reproduced from an intermediate (not microform)"),
        code("m", "Mixed"),
        code("n", "Not applicable"),
        code("u", "Unknown"),
        NO_ATTEMPT,
    ]),
    attr("levelOfCompression", "Level of compression", 12, 13).codes(&[
        code("a", "Uncompressed"),
        code("b", "Lossless"),
        code("d", "Lossy"),
        code("m", "Mixed"),
        code("u", "Unknown"),
        NO_ATTEMPT,
    ]),
    attr("reformattingQuality", "Reformatting quality", 13, 14).codes(&[
        code("a", "Access"),
        code("n", "Not applicable"),
        code("p", "Preservation"),
        code("r", "Replacement"),
        code("u", "Unknown"),
        NO_ATTEMPT,
    ]),
];

static GLOBE_007: &[PositionalAttribute] = &[
    category_of_material(),
    designation(&[
        code("a", "Celestial globe"),
        code("b", "Planetary or lunar globe"),
        code("c", "Terrestrial globe"),
        code("e", "Earth moon globe"),
        code("u", "Unspecified"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("color", "Color", 3, 4).codes(COLOR_BASIC),
    attr("physicalMedium", "Physical medium", 4, 5).codes(&[
        code("a", "Paper"),
        code("b", "Wood"),
        code("c", "Stone"),
        code("d", "Metal"),
        code("e", "Synthetic"),
        code("f", "Skin"),
        code("g", "Textile"),
        code("i", "Plastic"),
        code("l", "Vinyl"),
        code("n", "Vellum"),
        code("p", "Plaster"),
        code("u", "Unknown"),
        code("v", "Leather"),
        code("w", "Parchment"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("typeOfReproduction", "Type of reproduction", 5, 6).codes(&[
        code("f", "Facsimile"),
        code("n", "Not applicable"),
        code("u", "Unknown"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
];

static TACTILE_007: &[PositionalAttribute] = &[
    category_of_material(),
    designation(&[
        code("a", "Moon"),
        code("b", "Braille"),
        code("c", "Combination"),
        code("d", "Tactile, with no writing system"),
        code("u", "Unspecified"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("classOfBrailleWriting", "Class of braille writing", 3, 5)
        .per_character()
        .codes(&[
            code(" ", "No specified class of braille writing"),
            code("a", "Literary braille"),
            code("b", "Format code braille"),
            code("c", "Mathematics and scientific braille"),
            code("d", "Computer braille"),
            code("e", "Music braille"),
            code("m", "Multiple braille types"),
            code("n", "Not applicable"),
            code("u", "Unknown"),
            code("z", "Other"),
            NO_ATTEMPT,
        ]),
    attr("levelOfContraction", "Level of contraction", 5, 6).codes(&[
        code("a", "Uncontracted"),
        code("b", "Contracted"),
        code("m", "Combination"),
        code("n", "Not applicable"),
        code("u", "Unknown"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("brailleMusicFormat", "Braille music format", 6, 9),
    attr("specialPhysicalCharacteristics", "Special physical characteristics", 9, 10).codes(&[
        code("a", "Print/braille"),
        code("b", "Jumbo or enlarged braille"),
        code("n", "Not applicable"),
        code("u", "Unknown"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
];

static PROJECTED_GRAPHIC_007: &[PositionalAttribute] = &[
    category_of_material(),
    designation(&[
        code("c", "Filmstrip cartridge"),
        code("d", "Filmslip"),
        code("f", "Filmstrip, type unspecified"),
        code("o", "Filmstrip roll"),
        code("s", "Slide"),
        code("t", "Transparency"),
        code("u", "Unspecified"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("color", "Color", 3, 4).codes(COLOR_GRAPHIC),
    attr("baseOfEmulsion", "Base of emulsion", 4, 5),
    attr("soundOnMedium", "Sound on medium or separate", 5, 6).codes(SOUND_ON_MEDIUM),
    attr("mediumForSound", "Medium for sound", 6, 7),
    attr("dimensions", "Dimensions", 7, 8),
    attr("secondarySupport", "Secondary support material", 8, 9),
];

static MICROFORM_007: &[PositionalAttribute] = &[
    category_of_material(),
    designation(&[
        code("a", "Aperture card"),
        code("b", "Microfilm cartridge"),
        code("c", "Microfilm cassette"),
        code("d", "Microfilm reel"),
        code("e", "Microfiche"),
        code("f", "Microfiche cassette"),
        code("g", "Microopaque"),
        code("h", "Microfilm slip"),
        code("j", "Microfilm roll"),
        code("u", "Unspecified"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("positiveNegative", "Positive/negative aspect", 3, 4).codes(&[
        code("a", "Positive"),
        code("b", "Negative"),
        code("m", "Mixed polarity"),
        code("u", "Unknown"),
        NO_ATTEMPT,
    ]),
    attr("dimensions", "Dimensions", 4, 5),
    attr("reductionRatioRange", "Reduction ratio range", 5, 6),
    attr("reductionRatio", "Reduction ratio", 6, 9),
    attr("color", "Color", 9, 10),
    attr("emulsionOnFilm", "Emulsion on film", 10, 11),
    attr("generation", "Generation", 11, 12),
    attr("baseOfFilm", "Base of film", 12, 13),
];

static NONPROJECTED_GRAPHIC_007: &[PositionalAttribute] = &[
    category_of_material(),
    designation(&[
        code("a", "Activity card"),
        code("c", "Collage"),
        code("d", "Drawing"),
        code("e", "Painting"),
        code("f", "Photomechanical print"),
        code("g", "Photonegative"),
        code("h", "Photoprint"),
        code("i", "Picture"),
        code("j", "Print"),
        code("k", "Poster"),
        code("l", "Technical drawing"),
        code("n", "Chart"),
        code("o", "Flash card"),
        code("p", "Postcard"),
        code("q", "Icon"),
        code("r", "Radiograph"),
        code("s", "Study print"),
        code("u", "Unspecified"),
        code("v", "Photograph, type unspecified"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("color", "Color", 3, 4).codes(COLOR_GRAPHIC),
    attr("primarySupport", "Primary support material", 4, 5),
    attr("secondarySupport", "Secondary support material", 5, 6),
];

static MOTION_PICTURE_007: &[PositionalAttribute] = &[
    category_of_material(),
    designation(&[
        code("c", "Film cartridge"),
        code("f", "Film cassette"),
        code("o", "Film roll"),
        code("r", "Film reel"),
        code("u", "Unspecified"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("color", "Color", 3, 4).codes(COLOR_GRAPHIC),
    attr("presentationFormat", "Motion picture presentation format", 4, 5),
    attr("soundOnMedium", "Sound on medium or separate", 5, 6).codes(SOUND_ON_MEDIUM),
    attr("mediumForSound", "Medium for sound", 6, 7),
    attr("dimensions", "Dimensions", 7, 8),
    attr("playbackChannels", "Configuration of playback channels", 8, 9),
];

static KIT_007: &[PositionalAttribute] = &[category_of_material(), designation(UNSPECIFIED_DESIGNATION)];

static NOTATED_MUSIC_007: &[PositionalAttribute] =
    &[category_of_material(), designation(UNSPECIFIED_DESIGNATION)];

static REMOTE_SENSING_007: &[PositionalAttribute] = &[
    category_of_material(),
    designation(&[
        code("u", "Unspecified"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("altitudeOfSensor", "Altitude of sensor", 3, 4).codes(&[
        code("a", "Surface"),
        code("b", "Airborne"),
        code("c", "Spaceborne"),
        code("n", "Not applicable"),
        code("u", "Unknown"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("attitudeOfSensor", "Attitude of sensor", 4, 5),
    attr("cloudCover", "Cloud cover", 5, 6),
    attr("platformConstruction", "Platform construction type", 6, 7),
    attr("platformUse", "Platform use category", 7, 8),
    attr("sensorType", "Sensor type", 8, 9),
    attr("dataType", "Data type", 9, 11),
];

static SOUND_RECORDING_007: &[PositionalAttribute] = &[
    category_of_material(),
    designation(&[
        code("d", "Sound disc"),
        code("e", "Cylinder"),
        code("g", "Sound cartridge"),
        code("i", "Sound-track film"),
        code("q", "Roll"),
        code("r", "Remote"),
        code("s", "Sound cassette"),
        code("t", "Sound-tape reel"),
        code("u", "Unspecified"),
        code("w", "Wire recording"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("speed", "Speed", 3, 4).codes(&[
        code("a", "16 rpm"),
        code("b", "33 1/3 rpm"),
        code("c", "45 rpm"),
        code("d", "78 rpm"),
        code("e", "8 rpm"),
        code("f", "1.4 m. per sec."),
        code("h", "120 rpm"),
        code("i", "160 rpm"),
        code("k", "15/16 ips"),
        code("l", "1 7/8 ips"),
        code("m", "3 3/4 ips"),
        code("n", "Not applicable"),
        code("o", "7 1/2 ips"),
        code("p", "15 ips"),
        code("r", "30 ips"),
        code("u", "Unknown"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("configurationOfPlayback", "Configuration of playback channels", 4, 5).codes(&[
        code("m", "Monaural"),
        code("q", "Quadraphonic, multichannel, or surround"),
        code("s", "Stereophonic"),
        code("u", "Unknown"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("grooveWidth", "Groove width/groove pitch", 5, 6),
    attr("dimensions", "Dimensions", 6, 7),
    attr("tapeWidth", "Tape width", 7, 8),
    attr("tapeConfiguration", "Tape configuration", 8, 9),
    attr("kindOfDisc", "Kind of disc, cylinder, or tape", 9, 10),
    attr("kindOfMaterial", "Kind of material", 10, 11),
    attr("kindOfCutting", "Kind of cutting", 11, 12),
    attr("specialPlayback", "Special playback characteristics", 12, 13),
    attr("captureAndStorage", "Capture and storage technique", 13, 14),
];

static TEXT_007: &[PositionalAttribute] = &[
    category_of_material(),
    designation(&[
        code("a", "Regular print"),
        code("b", "Large print"),
        code("c", "Braille"),
        code("d", "Loose-leaf"),
        code("u", "Unspecified"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
];

static VIDEORECORDING_007: &[PositionalAttribute] = &[
    category_of_material(),
    designation(&[
        code("c", "Videocartridge"),
        code("d", "Videodisc"),
        code("f", "Videocassette"),
        code("r", "Videoreel"),
        code("u", "Unspecified"),
        code("z", "Other"),
        NO_ATTEMPT,
    ]),
    attr("color", "Color", 3, 4).codes(COLOR_GRAPHIC),
    attr("videorecordingFormat", "Videorecording format", 4, 5),
    attr("soundOnMedium", "Sound on medium or separate", 5, 6).codes(SOUND_ON_MEDIUM),
    attr("mediumForSound", "Medium for sound", 6, 7),
    attr("dimensions", "Dimensions", 7, 8),
    attr("playbackChannels", "Configuration of playback channels", 8, 9),
];

static UNSPECIFIED_007: &[PositionalAttribute] =
    &[category_of_material(), designation(UNSPECIFIED_DESIGNATION)];

/// 007 layout for a physical description category.
#[must_use]
pub fn layout_007(category: PhysicalDescription) -> &'static [PositionalAttribute] {
    match category {
        PhysicalDescription::Map => MAP_007,
        PhysicalDescription::ElectronicResource => ELECTRONIC_RESOURCE_007,
        PhysicalDescription::Globe => GLOBE_007,
        PhysicalDescription::TactileMaterial => TACTILE_007,
        PhysicalDescription::ProjectedGraphic => PROJECTED_GRAPHIC_007,
        PhysicalDescription::Microform => MICROFORM_007,
        PhysicalDescription::NonprojectedGraphic => NONPROJECTED_GRAPHIC_007,
        PhysicalDescription::MotionPicture => MOTION_PICTURE_007,
        PhysicalDescription::Kit => KIT_007,
        PhysicalDescription::NotatedMusic => NOTATED_MUSIC_007,
        PhysicalDescription::RemoteSensingImage => REMOTE_SENSING_007,
        PhysicalDescription::SoundRecording => SOUND_RECORDING_007,
        PhysicalDescription::Text => TEXT_007,
        PhysicalDescription::Videorecording => VIDEORECORDING_007,
        PhysicalDescription::Unspecified => UNSPECIFIED_007,
    }
}

/// The 007/00 attribute alone, used when 007/00 names no known category.
#[must_use]
pub fn category_of_material_007() -> &'static PositionalAttribute {
    &MAP_007[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_disjoint(layout: &[PositionalAttribute]) {
        for pair in layout.windows(2) {
            assert!(
                pair[0].end <= pair[1].start,
                "{} overlaps {}",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn test_008_layouts_are_ordered_and_disjoint() {
        for category in MaterialType::CONCRETE {
            let layout = layout_008(category);
            assert_disjoint(layout);
            assert!(layout.iter().all(|a| a.end <= LENGTH_008));
        }
    }

    #[test]
    fn test_shared_positions_merged_into_category() {
        let layout = layout_008(MaterialType::Books);
        let ids: Vec<&str> = layout.iter().map(|a| a.id).collect();
        assert_eq!(ids[0], "dateEnteredOnFile");
        assert!(ids.contains(&"illustrations"));
        assert_eq!(ids.last(), Some(&"catalogingSource"));
    }

    #[test]
    fn test_006_layout_is_shifted() {
        let layout = layout_006(MaterialType::Books);
        assert_eq!(layout[0].id, "formOfMaterial");
        let illustrations = layout.iter().find(|a| a.id == "illustrations").unwrap();
        assert_eq!((illustrations.start, illustrations.end), (1, 5));
        assert!(layout.iter().all(|a| a.end <= LENGTH_006));
        assert_disjoint(layout);
    }

    #[test]
    fn test_007_layouts_start_with_category() {
        for category in PhysicalDescription::ALL {
            let layout = layout_007(category);
            assert_eq!(layout[0].id, "categoryOfMaterial");
            assert_eq!(layout[1].start, 1);
            assert_disjoint(layout);
        }
    }

    #[test]
    fn test_labels_unique_within_attribute() {
        let mut layouts: Vec<&[PositionalAttribute]> =
            MaterialType::CONCRETE.iter().map(|c| layout_008(*c)).collect();
        layouts.extend(PhysicalDescription::ALL.iter().map(|c| layout_007(*c)));
        for attribute in layouts.into_iter().flatten() {
            let mut labels: Vec<&str> = attribute.codes.iter().map(|c| c.label).collect();
            let count = labels.len();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), count, "{}", attribute.id);
        }
    }
}
