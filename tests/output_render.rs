use cvgen::cli::{ThemeColor, ThemeStyle};
use cvgen::data::Resume;
use cvgen::output::{latex, text, TexTheme};
use cvgen::parse_resume;

fn fixture() -> Resume {
    parse_resume(include_str!("fixtures/cv.json")).expect("fixture should parse")
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("missing {needle:?} in output"))
}

#[test]
fn test_latex_header() {
    let tex = latex::render(&fixture(), &TexTheme::default());

    assert!(tex.contains(r"\moderncvcolor{blue}"));
    assert!(tex.contains(r"\moderncvstyle{classic}"));
    assert!(tex.contains(r"\name{Ada M.}{Lovelace}"));
    assert!(tex.contains(r"\title{Research Software Engineer}"));
    assert!(tex.contains(r"\address{12 St James's Square}{London, England SW1Y 4JH}{GB}"));
    assert!(tex.contains(r"\phone[mobile]{+44 20 7946 0000}"));
    assert!(tex.contains(r"\email{ada@example.org}"));
    assert!(tex.contains(r"\homepage{https://ada.example.org}"));
    assert!(tex.contains(
        "\\social[github]{ada-l}\n\\social[orcid]{https://orcid.org/0000-0000-0000-0000}"
    ));
    assert!(!tex.contains("Mastodon"));
    assert!(!tex.contains("example.social"));
}

#[test]
fn test_latex_body_sections() {
    let tex = latex::render(&fixture(), &TexTheme::default());

    assert!(tex.contains(
        r"\cvitem{}{Builds analytical engines \& the programs that run on them. \\ Enjoys 100\% test coverage.}"
    ));
    assert!(tex.contains(
        r"\cventry{2019--Present}{Lead Engineer}{Analytical Engines Ltd}{London}{}{Designed the note\_G pipeline for Bernoulli numbers.}"
    ));
    assert!(tex.contains(r"\cventry{2015--2019}{Engineer}{Difference \& Co}{Remote}{}{}"));
    assert!(tex.contains(r"\cventry{Current}{Role}{Freelance}{Remote}{}{}"));
    assert!(tex.contains(
        r"\cventry{2011--2014}{BSc in Mathematics}{University of London}{}{}{First class honours}"
    ));
    assert!(tex.contains("\\cvitem{Languages}{Rust, C\\#, LaTeX}\n\\cvitem{Tooling}{}"));
    assert!(tex.contains(r"\cvitem{Mentor}{Code Club: Weekly sessions}"));
    assert!(tex.contains(r"\cvitemwithcomment{French}{Professional}{}"));
    assert!(tex.contains(r"\cvitem{Music}{Harp, Composition}"));
    assert!(tex.contains(
        r"\item Sketch of the Analytical Engine (Taylor's Scientific Memoirs, 1843). Translation with notes A-G.\newline\href{https://example.org/sketch\_notes}{https://example.org/sketch\_notes}"
    ));
    assert!(tex.contains("\\item Unpublished Letters (). \n\\end{itemize}"));
}

#[test]
fn test_latex_section_order() {
    let tex = latex::render(&fixture(), &TexTheme::default());

    let order = [
        r"\documentclass",
        r"\name{",
        r"\begin{document}",
        r"\makecvtitle",
        r"\section{Professional Summary}",
        r"\section{Experience}",
        r"\section{Education}",
        r"\section{Skills}",
        r"\section{Volunteer}",
        r"\section{Languages}",
        r"\section{Interests}",
        r"\section{Publications}",
        r"\end{document}",
    ];
    let positions: Vec<usize> = order.iter().map(|needle| position(&tex, needle)).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    assert!(tex.ends_with(r"\end{document}"));
    assert!(!tex.contains("\n\n\n"));
}

#[test]
fn test_latex_theme() {
    let theme = TexTheme {
        color: ThemeColor::Orange,
        style: ThemeStyle::Casual,
    };
    let tex = latex::render(&fixture(), &theme);
    assert!(tex.contains(r"\moderncvcolor{orange}"));
    assert!(tex.contains(r"\moderncvstyle{casual}"));
}

#[test]
fn test_text_document() {
    let expected = "\
Ada M. Lovelace
Research Software Engineer
12 St James's Square | London, England | +44 20 7946 0000 | ada@example.org | https://ada.example.org

SUMMARY
Builds analytical engines & the programs that run on them.
Enjoys 100% test coverage.

EXPERIENCE
Lead Engineer — Analytical Engines Ltd
Designed the note_G pipeline for Bernoulli numbers.

Engineer — Difference & Co


Role — Freelance


EDUCATION
BSc in Mathematics — University of London
First class honours

SKILLS
Languages: Rust, C#, LaTeX
Tooling:\x20

PUBLICATIONS
Sketch of the Analytical Engine (Taylor's Scientific Memoirs)
Translation with notes A-G.
https://example.org/sketch_notes

Unpublished Letters ()
";
    assert_eq!(text::render(&fixture()), expected);
}
