//! The canonical Lab::VISA homepage.
//!
//! The page is authored in code so that rendering it takes no runtime input
//! at all: `document()` is a pure function, and rendering its result twice
//! yields byte-identical output.

use crate::model::{Block, Document, Inline, List, Metadata, ScriptRef};

/// Title of the canonical page.
pub const TITLE: &str = "Lab::VISA - measurement control in Perl";

/// StatCounter project id baked into the counter snippet.
const COUNTER_PROJECT: u32 = 5_798_171;

/// Build the canonical homepage document.
pub fn document() -> Document {
    let mut doc = Document::new();
    doc.metadata = Metadata::with_title(TITLE)
        .with_language("de")
        .with_stylesheet("doku.css");

    intro(&mut doc);
    obtain(&mut doc);
    documentation(&mut doc);
    status(&mut doc);
    authors(&mut doc);
    counter(&mut doc);

    doc
}

fn intro(doc: &mut Document) {
    doc.add_block(Block::heading(1, "Lab::VISA"));

    doc.add_block(Block::Image {
        src: "dokutitle.png".to_string(),
        alt: "Lab::VISA camelgraph".to_string(),
        width: Some("300px".to_string()),
        container_id: Some("camelgraph".to_string()),
    });

    doc.add_block(Block::paragraph_with(vec![
        Inline::text(
            "Lab::VISA allows to perform test and measurement tasks with Perl \
             scripts. It provides an interface to National Instruments' ",
        ),
        Inline::link(
            "NI-VISA library",
            "http://sine.ni.com/psp/app/doc/p/id/psp-411",
        ),
        Inline::text(
            ", making the standard VISA calls available to Perl programs. \
             Dedicated instrument driver classes relieve the user from taking \
             care for internal details and make data aquisition as easy as",
        ),
    ]));

    doc.add_block(Block::preformatted(
        Some("titleclaim"),
        "$voltage = $multimeter->read_voltage();",
    ));

    doc.add_block(Block::paragraph(
        "The Lab::VISA software stack comprises three parts that are built on \
         top of each other and provide increasing comfort. Measurement scripts \
         can be based on any of these stages.",
    ));

    doc.add_block(Block::paragraph(
        "The lowest level is Lab::VISA. It makes the NI-VISA library \
         accessible from Perl and thus allows to make any standard VISA call.",
    ));

    doc.add_block(Block::paragraph(
        "The modules in the Lab::Instrument package make communication with \
         instruments easier by silently handling the protocol overhead.",
    ));

    doc.add_block(Block::paragraph(
        "Package Lab::Tools is the highest abstraction layer and is intended \
         to support writing better measurement scripts. The modules in this \
         package offer means to log and plot data and its related meta \
         information.",
    ));

    doc.add_block(Block::paragraph(
        "These packages together are referred to as the Lab::VISA system. \
         Encapsulating the complexity of VISA calls into a straightforward to \
         use library, the Lab::VISA system is designed to make data \
         aquisition fun.",
    ));
}

fn obtain(doc: &mut Document) {
    doc.add_block(Block::heading(2, "How to obtain"));

    doc.add_block(Block::paragraph(
        "The packages are free software and can be downloaded from CPAN. \
         Follow these links for",
    ));

    doc.add_block(Block::List(
        List::unordered()
            .with_item(vec![
                Inline::link("Lab::VISA", "http://search.cpan.org/dist/Lab-VISA/"),
                Inline::text(","),
            ])
            .with_item(vec![
                Inline::link(
                    "Lab::Instrument",
                    "http://search.cpan.org/dist/Lab-Instrument/",
                ),
                Inline::text(", and"),
            ])
            .with_item(vec![
                Inline::link("Lab::Tools", "http://search.cpan.org/dist/Lab-Tools/"),
                Inline::text("."),
            ]),
    ));
}

fn documentation(doc: &mut Document) {
    doc.add_block(Block::heading(2, "Documentation"));

    doc.add_block(Block::paragraph_with(vec![
        Inline::text("Quite some "),
        Inline::link("documentation of Lab::VISA", "docs/"),
        Inline::text(" ("),
        Inline::link("PDF format", "docs/documentation.pdf"),
        Inline::text(") is available. This documentation includes a "),
        Inline::link("tutorial on using Lab::VISA", "docs/Tutorial.html"),
        Inline::text(". Detailed "),
        Inline::link("installation instructions", "docs/installation.html"),
        Inline::text(" are provided as well."),
    ]));

    doc.add_block(Block::paragraph_with(vec![
        Inline::text("These "),
        Inline::link("presentation slides on Lab::VISA", "Lab-VISA-talk.pdf"),
        Inline::text(" introduce the system and discuss a number of "),
        Inline::link(
            "examples",
            "http://cpansearch.perl.org/src/SCHROEER/Lab-VISA-2.05/Tutorial/Talk",
        ),
        Inline::text(", which are contained in the Lab::VISA package."),
    ]));

    doc.add_block(Block::paragraph_with(vec![
        Inline::text("There is a "),
        Inline::link(
            "mailing list (lab-visa-users)",
            "https://www-mailman.uni-regensburg.de/mailman/listinfo/lab-visa-users",
        ),
        Inline::text(
            " set up for Lab::VISA. This mailing list is the right place to \
             give feedback and ask for help.",
        ),
    ]));

    doc.add_block(Block::paragraph_with(vec![
        Inline::link(
            "National Instruments",
            "http://sine.ni.com/psp/app/doc/p/id/psp-411",
        ),
        Inline::text(" offers excellent documentation. We especially recommend the "),
        Inline::link(
            "NI-VISA User Manual",
            "http://www.ni.com/pdf/manuals/370423a.pdf",
        ),
        Inline::text(", the "),
        Inline::link(
            "NI-VISA Programmer Reference Manual",
            "http://www.ni.com/pdf/manuals/370132c.pdf",
        ),
        Inline::text(" and these references of "),
        Inline::link(
            "VISA resource names",
            "http://zone.ni.com/reference/en-XX/help/371361B-01/lvinstio/visa_resource_name_generic/",
        ),
        Inline::text(" and "),
        Inline::link(
            "VISA error codes",
            "http://zone.ni.com/reference/en-XX/help/371361B-01/lverror/visa_error_codes/",
        ),
        Inline::text("."),
    ]));
}

fn status(doc: &mut Document) {
    doc.add_block(Block::heading(2, "Status"));

    doc.add_block(Block::paragraph(
        "Although this software has been used for years in real world \
         measurements by its developers, it remains work in progress. Please \
         bear with us while we constantly improve code and documentation.",
    ));

    doc.add_block(Block::paragraph_with(vec![
        Inline::text("Lab::VISA is currently developed and employed at "),
        Inline::link(
            "nanophysics group, LMU München",
            "http://www.nano.physik.uni-muenchen.de/",
        ),
        Inline::text(" and "),
        Inline::link(
            "mesoscopic physics group, Uni Regensburg",
            "http://www.physik.uni-regensburg.de/forschung/strunk/",
        ),
        Inline::text(
            ". Users have reported further applications in academic and \
             industrial r&d environments.",
        ),
    ]));
}

fn authors(doc: &mut Document) {
    doc.add_block(Block::heading(2, "Authors"));

    doc.add_block(Block::paragraph_with(vec![
        Inline::text("The Lab::VISA system was originally developed by "),
        Inline::link("Daniel Schröer", "http://search.cpan.org/~schroeer/"),
        Inline::text(" and is now continued by "),
        Inline::link("Andreas K. Hüttel", "http://www.akhuettel.de/"),
        Inline::text(
            ", Daniela Taubert, and Daniel Schröer. Most of the documentation \
             was written by Daniel Schröer.",
        ),
    ]));
}

fn counter(doc: &mut Document) {
    doc.add_block(Block::comment("Start of StatCounter Code"));

    doc.add_block(Block::Script(ScriptRef::inline(format!(
        "var sc_project={};\nvar sc_invisible=1;\nvar sc_security=\"385de927\";",
        COUNTER_PROJECT
    ))));

    doc.add_block(Block::Script(ScriptRef::external(
        "http://www.statcounter.com/counter/counter.js",
    )));

    doc.add_block(Block::Raw {
        content: format!(
            "<noscript><div class=\"statcounter\"><a title=\"free hit counter\" \
             href=\"http://www.statcounter.com/\"><img class=\"statcounter\" \
             src=\"http://c.statcounter.com/{}/0/385de927/1/\" \
             alt=\"free hit counter\" /></a></div></noscript>",
            COUNTER_PROJECT
        ),
    });

    doc.add_block(Block::comment("End of StatCounter Code"));
}
