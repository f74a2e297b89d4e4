//! Keyword catalog.
//!
//! A static classification table mapping identifier names to keyword
//! categories, with optional documentation links and, for compound objects,
//! a table of recognized property names. Built once on first use from a flat
//! declarative tuple list and shared read-only by every scan; unknown
//! identifiers are simply absent and classify as plain identifiers.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::token::TokenKind;

/// Keyword category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    /// Declares a binding or type (`var`, `function`, `class`, …)
    Defining,
    /// Reserved language word (`return`, `if`, `typeof`, …)
    Reserved,
    /// ECMAScript built-in object or function
    Native,
    /// Literal value keyword (`true`, `null`, `NaN`, …)
    Value,
    /// Browser / client environment name
    Client,
    /// Library global (`$`, `jQuery`)
    Library,
}

impl KeywordKind {
    /// The token kind a keyword of this category renders as.
    pub fn token_kind(self) -> TokenKind {
        match self {
            KeywordKind::Defining => TokenKind::DefKey,
            KeywordKind::Reserved => TokenKind::ResKey,
            KeywordKind::Native => TokenKind::NatKey,
            KeywordKind::Value => TokenKind::ValKey,
            KeywordKind::Client => TokenKind::CliKey,
            KeywordKind::Library => TokenKind::JquKey,
        }
    }
}

/// One catalog entry: category, optional doc link, recognized properties.
#[derive(Debug)]
pub struct KeywordEntry {
    kind: KeywordKind,
    doc_link: Option<&'static str>,
    properties: HashMap<&'static str, Option<&'static str>>,
}

impl KeywordEntry {
    pub fn kind(&self) -> KeywordKind {
        self.kind
    }

    pub fn doc_link(&self) -> Option<&'static str> {
        self.doc_link
    }

    /// Whether `name` is a recognized property of this keyword.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Doc link for a recognized property, if it carries one.
    pub fn property_doc_link(&self, name: &str) -> Option<&'static str> {
        self.properties.get(name).copied().flatten()
    }
}

/// The read-only keyword lookup table.
pub struct Catalog {
    entries: HashMap<&'static str, KeywordEntry>,
}

impl Catalog {
    /// The process-wide catalog, built on first use and immutable after.
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::build)
    }

    /// Case-sensitive lookup; `None` means plain identifier.
    pub fn get(&self, name: &str) -> Option<&KeywordEntry> {
        self.entries.get(name)
    }

    fn build() -> Catalog {
        let mut entries = HashMap::with_capacity(KEYWORDS.len());
        for &(name, kind, doc_link, props) in KEYWORDS {
            entries.insert(
                name,
                KeywordEntry {
                    kind,
                    doc_link,
                    properties: props.iter().copied().collect(),
                },
            );
        }
        Catalog { entries }
    }
}

/// MDN link for a JavaScript global.
macro_rules! mdn {
    ($path:literal) => {
        Some(concat!(
            "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/",
            $path
        ))
    };
}

/// MDN link for a Web API.
macro_rules! web {
    ($path:literal) => {
        Some(concat!(
            "https://developer.mozilla.org/en-US/docs/Web/API/",
            $path
        ))
    };
}

type Properties = &'static [(&'static str, Option<&'static str>)];

const NO_PROPS: Properties = &[];

/// The declarative keyword table: `(name, category, doc link, properties)`.
#[rustfmt::skip]
const KEYWORDS: &[(&str, KeywordKind, Option<&'static str>, Properties)] = &[
    // --- Defining keywords ---
    ("class",    KeywordKind::Defining, None, NO_PROPS),
    ("const",    KeywordKind::Defining, None, NO_PROPS),
    ("enum",     KeywordKind::Defining, None, NO_PROPS),
    ("function", KeywordKind::Defining, None, NO_PROPS),
    ("let",      KeywordKind::Defining, None, NO_PROPS),
    ("var",      KeywordKind::Defining, None, NO_PROPS),

    // --- Reserved keywords ---
    ("abstract",     KeywordKind::Reserved, None, NO_PROPS),
    ("arguments",    KeywordKind::Reserved, None, NO_PROPS),
    ("await",        KeywordKind::Reserved, None, NO_PROPS),
    ("boolean",      KeywordKind::Reserved, None, NO_PROPS),
    ("break",        KeywordKind::Reserved, None, NO_PROPS),
    ("byte",         KeywordKind::Reserved, None, NO_PROPS),
    ("case",         KeywordKind::Reserved, None, NO_PROPS),
    ("catch",        KeywordKind::Reserved, None, NO_PROPS),
    ("char",         KeywordKind::Reserved, None, NO_PROPS),
    ("continue",     KeywordKind::Reserved, None, NO_PROPS),
    ("debugger",     KeywordKind::Reserved, None, NO_PROPS),
    ("default",      KeywordKind::Reserved, None, NO_PROPS),
    ("delete",       KeywordKind::Reserved, None, NO_PROPS),
    ("do",           KeywordKind::Reserved, None, NO_PROPS),
    ("double",       KeywordKind::Reserved, None, NO_PROPS),
    ("else",         KeywordKind::Reserved, None, NO_PROPS),
    ("export",       KeywordKind::Reserved, None, NO_PROPS),
    ("extends",      KeywordKind::Reserved, None, NO_PROPS),
    ("final",        KeywordKind::Reserved, None, NO_PROPS),
    ("finally",      KeywordKind::Reserved, None, NO_PROPS),
    ("float",        KeywordKind::Reserved, None, NO_PROPS),
    ("for",          KeywordKind::Reserved, None, NO_PROPS),
    ("goto",         KeywordKind::Reserved, None, NO_PROPS),
    ("if",           KeywordKind::Reserved, None, NO_PROPS),
    ("implements",   KeywordKind::Reserved, None, NO_PROPS),
    ("import",       KeywordKind::Reserved, None, NO_PROPS),
    ("in",           KeywordKind::Reserved, None, NO_PROPS),
    ("instanceof",   KeywordKind::Reserved, None, NO_PROPS),
    ("int",          KeywordKind::Reserved, None, NO_PROPS),
    ("interface",    KeywordKind::Reserved, None, NO_PROPS),
    ("long",         KeywordKind::Reserved, None, NO_PROPS),
    ("native",       KeywordKind::Reserved, None, NO_PROPS),
    ("new",          KeywordKind::Reserved, None, NO_PROPS),
    ("package",      KeywordKind::Reserved, None, NO_PROPS),
    ("private",      KeywordKind::Reserved, None, NO_PROPS),
    ("protected",    KeywordKind::Reserved, None, NO_PROPS),
    ("public",       KeywordKind::Reserved, None, NO_PROPS),
    ("return",       KeywordKind::Reserved, None, NO_PROPS),
    ("short",        KeywordKind::Reserved, None, NO_PROPS),
    ("static",       KeywordKind::Reserved, None, NO_PROPS),
    ("super",        KeywordKind::Reserved, None, NO_PROPS),
    ("switch",       KeywordKind::Reserved, None, NO_PROPS),
    ("synchronized", KeywordKind::Reserved, None, NO_PROPS),
    ("this",         KeywordKind::Reserved, None, NO_PROPS),
    ("throw",        KeywordKind::Reserved, None, NO_PROPS),
    ("throws",       KeywordKind::Reserved, None, NO_PROPS),
    ("transient",    KeywordKind::Reserved, None, NO_PROPS),
    ("try",          KeywordKind::Reserved, None, NO_PROPS),
    ("typeof",       KeywordKind::Reserved, None, NO_PROPS),
    ("void",         KeywordKind::Reserved, None, NO_PROPS),
    ("volatile",     KeywordKind::Reserved, None, NO_PROPS),
    ("while",        KeywordKind::Reserved, None, NO_PROPS),
    ("with",         KeywordKind::Reserved, None, NO_PROPS),
    ("yield",        KeywordKind::Reserved, None, NO_PROPS),

    // --- Value keywords ---
    ("false",     KeywordKind::Value, None, NO_PROPS),
    ("Infinity",  KeywordKind::Value, mdn!("Infinity"), NO_PROPS),
    ("NaN",       KeywordKind::Value, mdn!("NaN"), NO_PROPS),
    ("null",      KeywordKind::Value, None, NO_PROPS),
    ("true",      KeywordKind::Value, None, NO_PROPS),
    ("undefined", KeywordKind::Value, mdn!("undefined"), NO_PROPS),

    // --- Native objects and functions ---
    ("Array", KeywordKind::Native, mdn!("Array"), &[
        ("from",    mdn!("Array/from")),
        ("isArray", mdn!("Array/isArray")),
        ("length",  mdn!("Array/length")),
        ("of",      mdn!("Array/of")),
    ]),
    ("Boolean", KeywordKind::Native, mdn!("Boolean"), NO_PROPS),
    ("Date", KeywordKind::Native, mdn!("Date"), &[
        ("now",   mdn!("Date/now")),
        ("parse", mdn!("Date/parse")),
        ("UTC",   mdn!("Date/UTC")),
    ]),
    ("Error",    KeywordKind::Native, mdn!("Error"), NO_PROPS),
    ("Function", KeywordKind::Native, mdn!("Function"), NO_PROPS),
    ("JSON", KeywordKind::Native, mdn!("JSON"), &[
        ("parse",     mdn!("JSON/parse")),
        ("stringify", mdn!("JSON/stringify")),
    ]),
    ("Map", KeywordKind::Native, mdn!("Map"), NO_PROPS),
    ("Math", KeywordKind::Native, mdn!("Math"), &[
        ("abs",    mdn!("Math/abs")),
        ("ceil",   mdn!("Math/ceil")),
        ("E",      mdn!("Math/E")),
        ("floor",  mdn!("Math/floor")),
        ("log",    mdn!("Math/log")),
        ("max",    mdn!("Math/max")),
        ("min",    mdn!("Math/min")),
        ("PI",     mdn!("Math/PI")),
        ("pow",    mdn!("Math/pow")),
        ("random", mdn!("Math/random")),
        ("round",  mdn!("Math/round")),
        ("sqrt",   mdn!("Math/sqrt")),
    ]),
    ("Number", KeywordKind::Native, mdn!("Number"), &[
        ("isFinite",   mdn!("Number/isFinite")),
        ("isInteger",  mdn!("Number/isInteger")),
        ("isNaN",      mdn!("Number/isNaN")),
        ("MAX_VALUE",  mdn!("Number/MAX_VALUE")),
        ("MIN_VALUE",  mdn!("Number/MIN_VALUE")),
        ("parseFloat", mdn!("Number/parseFloat")),
        ("parseInt",   mdn!("Number/parseInt")),
    ]),
    ("Object", KeywordKind::Native, mdn!("Object"), &[
        ("create",         mdn!("Object/create")),
        ("defineProperty", mdn!("Object/defineProperty")),
        ("freeze",         mdn!("Object/freeze")),
        ("keys",           mdn!("Object/keys")),
        ("prototype",      mdn!("Object/prototype")),
    ]),
    ("Promise", KeywordKind::Native, mdn!("Promise"), &[
        ("all",     mdn!("Promise/all")),
        ("race",    mdn!("Promise/race")),
        ("reject",  mdn!("Promise/reject")),
        ("resolve", mdn!("Promise/resolve")),
    ]),
    ("RegExp", KeywordKind::Native, mdn!("RegExp"), NO_PROPS),
    ("Set",    KeywordKind::Native, mdn!("Set"), NO_PROPS),
    ("String", KeywordKind::Native, mdn!("String"), &[
        ("fromCharCode", mdn!("String/fromCharCode")),
    ]),
    ("Symbol",  KeywordKind::Native, mdn!("Symbol"), NO_PROPS),
    ("WeakMap", KeywordKind::Native, mdn!("WeakMap"), NO_PROPS),
    ("WeakSet", KeywordKind::Native, mdn!("WeakSet"), NO_PROPS),

    ("EvalError",      KeywordKind::Native, mdn!("EvalError"), NO_PROPS),
    ("RangeError",     KeywordKind::Native, mdn!("RangeError"), NO_PROPS),
    ("ReferenceError", KeywordKind::Native, mdn!("ReferenceError"), NO_PROPS),
    ("SyntaxError",    KeywordKind::Native, mdn!("SyntaxError"), NO_PROPS),
    ("TypeError",      KeywordKind::Native, mdn!("TypeError"), NO_PROPS),
    ("URIError",       KeywordKind::Native, mdn!("URIError"), NO_PROPS),

    ("decodeURI",          KeywordKind::Native, mdn!("decodeURI"), NO_PROPS),
    ("decodeURIComponent", KeywordKind::Native, mdn!("decodeURIComponent"), NO_PROPS),
    ("encodeURI",          KeywordKind::Native, mdn!("encodeURI"), NO_PROPS),
    ("encodeURIComponent", KeywordKind::Native, mdn!("encodeURIComponent"), NO_PROPS),
    ("eval",               KeywordKind::Native, mdn!("eval"), NO_PROPS),
    ("isFinite",           KeywordKind::Native, mdn!("isFinite"), NO_PROPS),
    ("isNaN",              KeywordKind::Native, mdn!("isNaN"), NO_PROPS),
    ("parseFloat",         KeywordKind::Native, mdn!("parseFloat"), NO_PROPS),
    ("parseInt",           KeywordKind::Native, mdn!("parseInt"), NO_PROPS),

    // --- Client environment ---
    ("alert",   KeywordKind::Client, web!("Window/alert"), NO_PROPS),
    ("confirm", KeywordKind::Client, web!("Window/confirm"), NO_PROPS),
    ("console", KeywordKind::Client, web!("console"), &[
        ("assert", web!("console/assert_static")),
        ("error",  web!("console/error_static")),
        ("info",   web!("console/info_static")),
        ("log",    web!("console/log_static")),
        ("table",  web!("console/table_static")),
        ("trace",  web!("console/trace_static")),
        ("warn",   web!("console/warn_static")),
    ]),
    ("document", KeywordKind::Client, web!("Document"), &[
        ("addEventListener",        web!("EventTarget/addEventListener")),
        ("body",                    web!("Document/body")),
        ("createElement",           web!("Document/createElement")),
        ("createTextNode",          web!("Document/createTextNode")),
        ("getElementById",          web!("Document/getElementById")),
        ("getElementsByClassName",  web!("Document/getElementsByClassName")),
        ("getElementsByTagName",    web!("Document/getElementsByTagName")),
        ("head",                    web!("Document/head")),
        ("querySelector",           web!("Document/querySelector")),
        ("querySelectorAll",        web!("Document/querySelectorAll")),
        ("title",                   web!("Document/title")),
    ]),
    ("Element",        KeywordKind::Client, web!("Element"), NO_PROPS),
    ("Event",          KeywordKind::Client, web!("Event"), NO_PROPS),
    ("fetch",          KeywordKind::Client, web!("Window/fetch"), NO_PROPS),
    ("history",        KeywordKind::Client, web!("Window/history"), NO_PROPS),
    ("HTMLElement",    KeywordKind::Client, web!("HTMLElement"), NO_PROPS),
    ("localStorage",   KeywordKind::Client, web!("Window/localStorage"), NO_PROPS),
    ("location",       KeywordKind::Client, web!("Window/location"), NO_PROPS),
    ("navigator",      KeywordKind::Client, web!("Window/navigator"), NO_PROPS),
    ("Node",           KeywordKind::Client, web!("Node"), NO_PROPS),
    ("prompt",         KeywordKind::Client, web!("Window/prompt"), NO_PROPS),
    ("screen",         KeywordKind::Client, web!("Window/screen"), NO_PROPS),
    ("sessionStorage", KeywordKind::Client, web!("Window/sessionStorage"), NO_PROPS),
    ("window", KeywordKind::Client, web!("Window"), &[
        ("addEventListener", web!("EventTarget/addEventListener")),
        ("clearInterval",    web!("Window/clearInterval")),
        ("clearTimeout",     web!("Window/clearTimeout")),
        ("document",         web!("Window/document")),
        ("location",         web!("Window/location")),
        ("setInterval",      web!("Window/setInterval")),
        ("setTimeout",       web!("Window/setTimeout")),
    ]),
    ("XMLHttpRequest", KeywordKind::Client, web!("XMLHttpRequest"), NO_PROPS),

    // --- Library globals ---
    ("$", KeywordKind::Library, Some("https://api.jquery.com/"), &[
        ("ajax",   Some("https://api.jquery.com/jQuery.ajax/")),
        ("each",   Some("https://api.jquery.com/jQuery.each/")),
        ("extend", Some("https://api.jquery.com/jQuery.extend/")),
        ("get",    Some("https://api.jquery.com/jQuery.get/")),
        ("post",   Some("https://api.jquery.com/jQuery.post/")),
    ]),
    ("jQuery", KeywordKind::Library, Some("https://api.jquery.com/"), &[
        ("ajax",   Some("https://api.jquery.com/jQuery.ajax/")),
        ("each",   Some("https://api.jquery.com/jQuery.each/")),
        ("extend", Some("https://api.jquery.com/jQuery.extend/")),
        ("get",    Some("https://api.jquery.com/jQuery.get/")),
        ("post",   Some("https://api.jquery.com/jQuery.post/")),
    ]),
];
