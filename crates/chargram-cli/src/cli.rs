use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chargram", bin_name = "chargram")]
#[command(about = "Compile EBNF character-class grammars into char predicates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse and compile a grammar file, reporting any errors
    #[command(after_help = r#"EXAMPLES:
  chargram check digits.ebnf"#)]
    Check {
        /// Grammar file
        #[arg(value_name = "GRAMMAR")]
        grammar: PathBuf,
    },

    /// List the rules of a grammar that compiles cleanly
    #[command(after_help = r#"EXAMPLES:
  chargram rules digits.ebnf"#)]
    Rules {
        /// Grammar file
        #[arg(value_name = "GRAMMAR")]
        grammar: PathBuf,
    },

    /// Classify characters against one rule of a compiled grammar
    #[command(after_help = r#"EXAMPLES:
  chargram test digits.ebnf -r DIGIT "a1b2"
  chargram test tokens.ebnf --rule WORD hello_42"#)]
    Test {
        /// Grammar file
        #[arg(value_name = "GRAMMAR")]
        grammar: PathBuf,

        /// Rule to test against
        #[arg(short, long, value_name = "RULE")]
        rule: String,

        /// Characters to classify, one test per character
        #[arg(value_name = "CHARS")]
        chars: String,
    },
}
