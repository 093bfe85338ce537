//! Golden output tests using datatest-stable.
//!
//! Each file in `tests/golden/` holds the exact expected markup for the
//! document of the same name built below. Documents that can be written both
//! with the typed DOM and with runtime-validated nodes are built both ways,
//! and both must match the file byte for byte.

use std::path::Path;

use tagtree::dom::{A, Body, Br, Div, H1, H2, H3, H4, H5, H6, Head, Html, Img, P, Title};
use tagtree::{BuildError, Document, Node};

fn readme_typed() -> Html {
    Html::new()
        .head(Head::new().child(Title::new("Help Me.")))
        .body(
            Body::new()
                .child(H1::with_text("The horror!"))
                .child(P::with_text("Someone has probably done this before..."))
                .child(A::new("href='https://example.com'").text("For science")),
        )
}

fn readme_nodes() -> Result<Document, BuildError> {
    let head = Node::head([Node::title("Help Me.")?])?;
    let body = Node::body([
        Node::h1(Some("The horror!"), [])?,
        Node::p(Some("Someone has probably done this before..."), [])?,
        Node::a(["href='https://example.com'"], Some("For science"), [])?,
    ])?;
    Document::new(Some(head), Some(body))
}

fn all_elements_typed() -> Html {
    Html::new()
        .head(Head::new().child(Title::new("Typed markup")))
        .body(
            Body::new()
                .child(H1::with_text("Every element at least once"))
                .child(H2::with_text("Here are some pictures:"))
                .child(
                    Img::new("src='https://example.com/panda.jpg'")
                        .alt("alt='A panda bear'")
                        .width("width=300"),
                )
                .child(Br)
                .child(H2::with_text("Here is some text"))
                .child(
                    Div::new()
                        .child(P::with_text("Hello, World!"))
                        .child(P::with_text("This document structure has been checked.")),
                )
                .child(
                    H3::with_text("Smaller").child(
                        H4::with_text("and smaller")
                            .child(H5::with_text("and smaller").child(H6::with_text("still"))),
                    ),
                )
                .child(A::new("href='https://doc.rust-lang.org/'").text("This website is helpful")),
        )
}

fn all_elements_nodes() -> Result<Document, BuildError> {
    let head = Node::head([Node::title("Typed markup")?])?;
    let body = Node::body([
        Node::h1(Some("Every element at least once"), [])?,
        Node::h2(Some("Here are some pictures:"), [])?,
        Node::img([
            "src='https://example.com/panda.jpg'",
            "alt='A panda bear'",
            "width=300",
        ])?,
        Node::br()?,
        Node::heading(2, Some("Here is some text"), [])?,
        Node::div([
            Node::p(Some("Hello, World!"), [])?,
            Node::p(Some("This document structure has been checked."), [])?,
        ])?,
        Node::h3(
            Some("Smaller"),
            [Node::h4(
                Some("and smaller"),
                [Node::h5(Some("and smaller"), [Node::h6(Some("still"), [])?])?],
            )?],
        )?,
        Node::a(
            ["href='https://doc.rust-lang.org/'"],
            Some("This website is helpful"),
            [],
        )?,
    ])?;
    Document::new(Some(head), Some(body))
}

fn head_only_nodes() -> Result<Document, BuildError> {
    Document::empty().with_head(Node::head([Node::title("Nothing to see")?])?)
}

fn images_nodes() -> Result<Document, BuildError> {
    let body = Node::body([
        Node::img(["src=a.png", "", ""])?,
        Node::img(["", "alt='no source'"])?,
        Node::img([""; 0])?,
        Node::a([""], None, [Node::img(["src=b.png", "width=12"])?])?,
    ])?;
    Document::empty().with_body(body)
}

fn documents_for(name: &str) -> Result<Vec<Document>, Box<dyn std::error::Error>> {
    let docs = match name {
        "readme" => vec![readme_typed().into(), readme_nodes()?],
        "all_elements" => vec![all_elements_typed().into(), all_elements_nodes()?],
        "empty" => vec![Html::new().into(), Document::empty()],
        "head_only" => vec![head_only_nodes()?],
        "images" => vec![images_nodes()?],
        other => return Err(format!("no document registered for fixture {other:?}").into()),
    };
    Ok(docs)
}

fn run_golden_test(path: &Path) -> datatest_stable::Result<()> {
    facet_testhelpers::setup();

    let expected = std::fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or("fixture has no usable file name")?;

    for (i, doc) in documents_for(name)?.iter().enumerate() {
        let actual = doc.to_markup();
        if actual != expected {
            return Err(format!(
                "{name} (build #{i}) does not match fixture\n--- expected\n{expected}--- actual\n{actual}"
            )
            .into());
        }
    }

    Ok(())
}

datatest_stable::harness! {
    { test = run_golden_test, root = "tests/golden", pattern = r".*\.html$" },
}
