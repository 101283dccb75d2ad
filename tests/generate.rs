use docdown::{entry, generate, ConfigError, DocumentedMember, HashStyle, Options, TocMode};

const URL: &str = "https://github.com/example/sample/blob/main/sample.js";

fn fixture() -> String {
    let path = format!("{}/tests/fixtures/sample.js", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(path).unwrap()
}

fn options() -> Options {
    Options::new("sample.js", URL)
}

#[test]
fn path_is_checked_before_url() {
    let opts = Options::default();
    assert_eq!(generate("", &opts), Err(ConfigError::MissingPath));
    let opts = Options {
        url: None,
        ..options()
    };
    assert_eq!(generate(&fixture(), &opts), Err(ConfigError::MissingUrl));
}

#[test]
fn empty_source_yields_only_the_title() {
    let doc = generate("var a = 1;\n", &options()).unwrap();
    assert_eq!(doc, "# sample.js API documentation\n\n");
}

#[test]
fn output_is_deterministic() {
    let source = fixture();
    assert_eq!(
        generate(&source, &options()).unwrap(),
        generate(&source, &options()).unwrap()
    );
}

#[test]
fn every_public_entry_has_exactly_one_block() {
    let source = fixture();
    let doc = generate(&source, &options()).unwrap();
    let entries = entry::parse(&source, "js");
    let public: Vec<_> = entries.iter().filter(|e| !e.is_private()).collect();
    assert_eq!(public.len(), 10);
    for entry in public {
        let anchor = format!("### <a id=\"{}\"></a>", entry.hash(HashStyle::Default));
        assert_eq!(doc.matches(&anchor).count(), 1, "{}", entry.name());
    }
    assert_eq!(doc.matches("<!-- div -->").count(), doc.matches("<!-- /div -->").count());
}

#[test]
fn parent_constructor_makes_members_prototype_methods() {
    let source = fixture();
    let entries = entry::parse(&source, "js");
    let chain = entries.iter().find(|e| e.name() == "chain").unwrap();
    assert!(!chain.is_static());
    assert!(chain.is_plugin());
    assert_eq!(chain.qualified_name(), "_.prototype.chain");

    let escape = entries.iter().find(|e| e.name() == "escape").unwrap();
    assert!(escape.is_static());
    assert_eq!(escape.qualified_name(), "_.templateSettings.escape");
}

#[test]
fn aliases_report_owner_attributes() {
    let source = fixture();
    let entries = entry::parse(&source, "js");
    let head = entries.iter().find(|e| e.name() == "head").unwrap();
    let aliases = head.aliases();
    assert_eq!(aliases.len(), 1);
    let first = &aliases[0];
    assert_eq!(first.name(), "first");
    assert!(first.is_alias());
    assert_eq!(first.call(), "head(array)");
    assert_eq!(first.since(), Some("0.1.0"));
    assert_eq!(first.owner().map(|o| o.name()), Some("head"));
}

#[test]
fn category_mode_trails_methods_and_properties() {
    let opts = Options {
        toc: TocMode::Categories,
        ..options()
    };
    let doc = generate(&fixture(), &opts).unwrap();
    let headings: Vec<&str> = doc
        .lines()
        .filter(|l| l.starts_with("## `"))
        .collect();
    assert_eq!(
        headings,
        vec!["## `Array`", "## `Function`", "## `Seq`", "## `Methods`", "## `Properties`"]
    );
}

#[test]
fn category_mode_sorts_by_call() {
    let opts = Options {
        toc: TocMode::Categories,
        ..options()
    };
    let doc = generate(&fixture(), &opts).unwrap();
    let chunk = doc.find(">_.chunk</a>").unwrap();
    let first = doc.find(">_.first -> head</a>").unwrap();
    let head = doc.find(">_.head</a>").unwrap();
    assert!(chunk < first && first < head);
}

#[test]
fn escaping_leaves_code_spans_alone() {
    let source = "/**\n * Matches `[a-z]*` but not [this] or *that*.\n *\n * @static\n * @type {RegExp}\n */\nvar reWord = /x/;\n";
    let doc = generate(source, &options()).unwrap();
    assert!(doc.contains("*(RegExp)*: Matches `[a-z]*` but not &#91;this&#93; or &#42;that&#42;."));
}
