#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! AST-level test that keeps numeric parsing of user input in one place.
//!
//! The calculator's validation messages depend on `parse_operand` deciding
//! what counts as empty and what counts as a number. A component that calls
//! `.parse::<f64>()` on input text itself would bypass those rules.
//!
//! Example of bad code:
//! ```ignore
//! // BAD: component parses the field directly
//! oninput: move |e| value.set(e.value().parse::<f64>().unwrap_or(0.0))
//! ```
//!
//! Example of correct code:
//! ```ignore
//! // GOOD: text goes into the state, which parses through parse_operand
//! oninput: move |e| state.write().set_operand(Operand::First, e.value())
//! ```

use std::fs;
use std::path::Path;
use syn::visit::Visit;
use syn::{ExprMethodCall, File, GenericArgument, Type};
use walkdir::WalkDir;

/// The only file allowed to turn operand text into floats
const ALLOWED_FILE: &str = "src/app/calculator.rs";

/// Visitor that detects `.parse::<f32>()` / `.parse::<f64>()` calls
struct FloatParseVisitor {
    current_file: String,
    violations: Vec<(String, String)>,
}

impl FloatParseVisitor {
    fn new(file: String) -> Self {
        Self {
            current_file: file,
            violations: Vec::new(),
        }
    }

    fn is_float_type(arg: &GenericArgument) -> bool {
        if let GenericArgument::Type(Type::Path(type_path)) = arg {
            return type_path
                .path
                .segments
                .last()
                .map_or(false, |seg| seg.ident == "f64" || seg.ident == "f32");
        }
        false
    }
}

impl<'ast> Visit<'ast> for FloatParseVisitor {
    fn visit_expr_method_call(&mut self, method_call: &'ast ExprMethodCall) {
        if method_call.method == "parse" {
            if let Some(turbofish) = &method_call.turbofish {
                if turbofish.args.iter().any(Self::is_float_type) {
                    self.violations.push((
                        self.current_file.clone(),
                        ".parse::<float>() outside parse_operand".to_string(),
                    ));
                }
            }
        }

        syn::visit::visit_expr_method_call(self, method_call);
    }
}

fn analyze_file(path: &Path) -> Vec<(String, String)> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };

    let syntax: File = match syn::parse_file(&content) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
            return vec![];
        }
    };

    let mut visitor = FloatParseVisitor::new(path.display().to_string());
    visitor.visit_file(&syntax);
    visitor.violations
}

#[test]
fn detects_float_parse_pattern() {
    let bad_code = r#"
        fn example(text: String) -> f64 {
            text.trim().parse::<f64>().unwrap_or(0.0)
        }
    "#;

    let syntax: File = syn::parse_file(bad_code).unwrap();
    let mut visitor = FloatParseVisitor::new("test.rs".to_string());
    visitor.visit_file(&syntax);

    assert_eq!(
        visitor.violations.len(),
        1,
        "Should detect one violation in bad code"
    );
}

#[test]
fn allows_non_float_parse() {
    let good_code = r#"
        fn example(text: &str) -> Option<u16> {
            let port = text.parse::<u16>().ok();
            let _route: Result<String, _> = text.parse();
            port
        }
    "#;

    let syntax: File = syn::parse_file(good_code).unwrap();
    let mut visitor = FloatParseVisitor::new("test.rs".to_string());
    visitor.visit_file(&syntax);

    assert!(
        visitor.violations.is_empty(),
        "Should not flag integer or inferred parses"
    );
}

#[test]
fn operand_parsing_stays_in_calculator_state() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let src_dir = root.join("src");
    let allowed = root.join(ALLOWED_FILE);

    let mut all_violations = Vec::new();

    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "rs"))
        .filter(|e| e.path() != allowed)
    {
        all_violations.extend(analyze_file(entry.path()));
    }

    if !all_violations.is_empty() {
        let mut error_msg = String::from(
            "\n\nFound float parsing outside the calculator state!\n\
             Route operand text through calculator::parse_operand so the\n\
             empty / not-a-number rules stay consistent.\n\n\
             Violations:\n",
        );

        for (file, context) in &all_violations {
            error_msg.push_str(&format!("  - {}: {}\n", file, context));
        }

        panic!("{}", error_msg);
    }
}
