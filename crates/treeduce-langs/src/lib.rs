//! Built-in tree-sitter grammars.
//!
//! Each language is gated behind a feature of the same name, so binaries can
//! compile in only the grammars they need.

use tree_sitter::Language;

#[cfg(test)]
mod lib_tests;

/// A compiled-in language: a tree-sitter grammar plus naming metadata.
#[derive(Clone)]
pub struct Lang {
    name: &'static str,
    language: Language,
}

impl Lang {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Parse source code with this grammar. `None` means the parser gave up
    /// (timeout or cancellation), not a syntax error; syntactically invalid
    /// input yields a tree with error nodes.
    pub fn parse(&self, source: &str) -> Option<tree_sitter::Tree> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.language)
            .expect("failed to set language");
        parser.parse(source, None)
    }
}

macro_rules! define_langs {
    (
        $(
            $fn_name:ident => {
                feature: $feature:literal,
                name: $name:literal,
                language: $language:expr,
                names: [$($alias:literal),* $(,)?],
                extensions: [$($ext:literal),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        $(
            #[cfg(feature = $feature)]
            pub fn $fn_name() -> Lang {
                Lang {
                    name: $name,
                    language: $language.into(),
                }
            }
        )*

        /// Look up a language by (case-insensitive) name or alias.
        pub fn from_name(s: &str) -> Option<Lang> {
            match s.to_ascii_lowercase().as_str() {
                $(
                    #[cfg(feature = $feature)]
                    $($alias)|* => Some($fn_name()),
                )*
                _ => None,
            }
        }

        /// Look up a language by file extension.
        pub fn from_ext(ext: &str) -> Option<Lang> {
            match ext.to_ascii_lowercase().as_str() {
                $(
                    #[cfg(feature = $feature)]
                    $($ext)|* => Some($fn_name()),
                )*
                _ => None,
            }
        }

        /// All compiled-in languages.
        pub fn all() -> Vec<Lang> {
            vec![
                $(
                    #[cfg(feature = $feature)]
                    $fn_name(),
                )*
            ]
        }
    };
}

define_langs! {
    c => {
        feature: "c",
        name: "c",
        language: tree_sitter_c::LANGUAGE,
        names: ["c"],
        extensions: ["c", "h"],
    },
    javascript => {
        feature: "javascript",
        name: "javascript",
        language: tree_sitter_javascript::LANGUAGE,
        names: ["javascript", "js"],
        extensions: ["js", "mjs", "cjs"],
    },
    json => {
        feature: "json",
        name: "json",
        language: tree_sitter_json::LANGUAGE,
        names: ["json"],
        extensions: ["json"],
    },
    python => {
        feature: "python",
        name: "python",
        language: tree_sitter_python::LANGUAGE,
        names: ["python", "py"],
        extensions: ["py"],
    },
}
