//! ECMAScript-family import extraction via swc.
//!
//! One extractor instance covers one (language, mode) pair. The source text
//! is parsed to an AST and walked for the three import shapes depscan
//! understands: static `import` declarations, dynamic `import()` expressions,
//! and CommonJS `require()` calls. Because matching happens on the tree, a
//! string literal that merely *contains* import-like text can never produce a
//! match.

use std::sync::Arc;

use swc_common::{BytePos, FileName, GLOBALS, Globals, SourceMap};
use swc_ecma_ast::{CallExpr, Callee, Expr, ImportDecl, Lit, Program, Str};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};
use swc_ecma_visit::{Visit, VisitWith};

use super::{ImportExtractor, ScriptLanguage};
use crate::core::dialect::SourceMode;
use crate::core::error::ExtractError;
use crate::core::package::root_package;

/// Extractor for the ECMAScript family (JS/TS, with or without JSX).
///
/// This type is the only delegate the embedded extractor can hold, so a
/// component format can never delegate to another component format.
pub struct EcmaExtractor {
    language: ScriptLanguage,
    mode: SourceMode,
}

impl EcmaExtractor {
    pub fn new(language: ScriptLanguage, mode: SourceMode) -> Self {
        EcmaExtractor { language, mode }
    }

    fn syntax(&self) -> Syntax {
        match self.language {
            // JSX stays enabled for plain JS, matching how .jsx and .js share
            // one grammar.
            ScriptLanguage::Js => Syntax::Es(EsSyntax {
                jsx: true,
                ..Default::default()
            }),
            ScriptLanguage::Ts => Syntax::Typescript(TsSyntax {
                tsx: true,
                ..Default::default()
            }),
        }
    }
}

impl ImportExtractor for EcmaExtractor {
    fn extract(&self, text: &str, dependency: &str) -> Result<Vec<usize>, ExtractError> {
        GLOBALS.set(&Globals::new(), || {
            let source_map = Arc::new(SourceMap::default());
            let source_file =
                source_map.new_source_file(FileName::Anon.into(), text.to_string());

            let mut parser = Parser::new(self.syntax(), StringInput::from(&*source_file), None);
            let program = match self.mode {
                SourceMode::Module => parser.parse_module().map(Program::Module),
                SourceMode::Script => parser.parse_script().map(Program::Script),
            }
            .map_err(|err| {
                let kind = err.into_kind();
                ExtractError::parse(kind.msg())
            })?;

            let mut visitor = ImportVisitor {
                dependency,
                source_map: &source_map,
                lines: Vec::new(),
            };
            program.visit_with(&mut visitor);

            let mut lines = visitor.lines;
            lines.sort_unstable();
            lines.dedup();
            Ok(lines)
        })
    }
}

/// AST walker collecting the starting line of every import site whose
/// specifier's root package equals the target dependency.
struct ImportVisitor<'a> {
    dependency: &'a str,
    source_map: &'a SourceMap,
    lines: Vec<usize>,
}

impl ImportVisitor<'_> {
    fn record(&mut self, lo: BytePos) {
        self.lines.push(self.source_map.lookup_char_pos(lo).line);
    }

    fn matches(&self, specifier: &Str) -> bool {
        specifier
            .value
            .as_str()
            .is_some_and(|value| root_package(value) == self.dependency)
    }
}

impl Visit for ImportVisitor<'_> {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        // Covers default, named, aliased, namespace, bare side-effect and
        // `import type` declarations alike.
        if self.matches(&node.src) {
            self.record(node.span.lo);
        }
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        match &node.callee {
            Callee::Import(_) => {
                if let Some(arg) = node.args.first()
                    && arg.spread.is_none()
                    && let Expr::Lit(Lit::Str(source)) = &*arg.expr
                    && self.matches(source)
                {
                    self.record(node.span.lo);
                }
            }
            Callee::Expr(callee) => {
                if let Expr::Ident(ident) = &**callee
                    && ident.sym == "require"
                    && node.args.len() == 1
                    && node.args[0].spread.is_none()
                    && let Expr::Lit(Lit::Str(source)) = &*node.args[0].expr
                    && self.matches(source)
                {
                    self.record(node.span.lo);
                }
            }
            Callee::Super(_) => {}
        }

        // Dynamic imports count wherever they occur, so keep walking into
        // arguments and nested closures.
        node.visit_children_with(self);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn js_module() -> EcmaExtractor {
        EcmaExtractor::new(ScriptLanguage::Js, SourceMode::Module)
    }

    fn js_script() -> EcmaExtractor {
        EcmaExtractor::new(ScriptLanguage::Js, SourceMode::Script)
    }

    fn ts_module() -> EcmaExtractor {
        EcmaExtractor::new(ScriptLanguage::Ts, SourceMode::Module)
    }

    #[test]
    fn default_import() {
        let content = "import express from 'express'; const app = express();";
        assert_eq!(js_module().extract(content, "express").unwrap(), vec![1]);
    }

    #[test]
    fn named_and_aliased_imports() {
        let content = "import { json } from 'express';\nimport { Router as r } from 'express';\n";
        assert_eq!(js_module().extract(content, "express").unwrap(), vec![1, 2]);
    }

    #[test]
    fn namespace_import() {
        let content = "import * as fs from 'node:fs';\n";
        assert_eq!(js_module().extract(content, "node:fs").unwrap(), vec![1]);
    }

    #[test]
    fn side_effect_import() {
        let content = "import 'windicss/dist/base.css';\n";
        assert_eq!(js_module().extract(content, "windicss").unwrap(), vec![1]);
    }

    #[test]
    fn sub_path_resolves_to_root_package() {
        let content = "import { defineConfig } from 'windicss/helpers';";
        let extractor = js_module();

        assert_eq!(extractor.extract(content, "windicss").unwrap(), vec![1]);
        assert_eq!(extractor.extract(content, "windicss-helpers").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn scoped_package_sub_path() {
        let content = "import decorate from '@namchee/decora/dist/index.js';\n";
        assert_eq!(
            js_module().extract(content, "@namchee/decora").unwrap(),
            vec![1]
        );
    }

    #[test]
    fn dynamic_import_nested_in_async_body() {
        let content = "const a = 1;\n\nasync function load() {\n  const { nanoid } = await import('nanoid');\n  return nanoid();\n}\n";
        assert_eq!(js_module().extract(content, "nanoid").unwrap(), vec![4]);
    }

    #[test]
    fn dynamic_import_in_conditional() {
        let content = "if (cond) {\n  import('pad-left').then(m => m.default);\n}\n";
        assert_eq!(js_module().extract(content, "pad-left").unwrap(), vec![2]);
    }

    #[test]
    fn dynamic_import_with_non_literal_source_is_ignored() {
        let content = "const name = 'express';\nimport(name);\n";
        assert_eq!(
            js_module().extract(content, "express").unwrap(),
            Vec::<usize>::new()
        );
    }

    #[test]
    fn require_call() {
        let content = "const a = require('express');";
        assert_eq!(js_script().extract(content, "express").unwrap(), vec![1]);
    }

    #[test]
    fn require_still_works_under_module_mode() {
        let content = "const a = require('express');";
        assert_eq!(js_module().extract(content, "express").unwrap(), vec![1]);
    }

    #[test]
    fn require_with_extra_arguments_is_ignored() {
        let content = "const a = require('express', 'extra');";
        assert_eq!(
            js_script().extract(content, "express").unwrap(),
            Vec::<usize>::new()
        );
    }

    #[test]
    fn require_with_non_literal_argument_is_ignored() {
        let content = "const name = 'express';\nconst a = require(name);\n";
        assert_eq!(
            js_script().extract(content, "express").unwrap(),
            Vec::<usize>::new()
        );
    }

    #[test]
    fn string_literal_containing_import_text_is_data() {
        let content = "const foo = \"import x from 'pkg'\";\n";
        assert_eq!(
            js_module().extract(content, "pkg").unwrap(),
            Vec::<usize>::new()
        );
    }

    #[test]
    fn shebang_block_shifts_lines_by_its_height() {
        let plain = "import express from 'express';\n";
        let prefixed = format!("#!/usr/bin/env node\n\n{plain}");

        assert_eq!(js_module().extract(plain, "express").unwrap(), vec![1]);
        assert_eq!(js_module().extract(&prefixed, "express").unwrap(), vec![3]);
    }

    #[test]
    fn import_type_declaration() {
        let content = "import type { Ref } from 'vue';\nimport { ref } from 'vue';\n";
        assert_eq!(ts_module().extract(content, "vue").unwrap(), vec![1, 2]);
    }

    #[test]
    fn tsx_component() {
        let content = "import { useState } from 'react';\n\nexport function Counter(): JSX.Element {\n  const [n, setN] = useState(0);\n  return <button onClick={() => setN(n + 1)}>{n}</button>;\n}\n";
        assert_eq!(ts_module().extract(content, "react").unwrap(), vec![1]);
    }

    #[test]
    fn jsx_in_plain_javascript() {
        let content = "import React from 'react';\n\nexport const App = () => <div>hello</div>;\n";
        assert_eq!(js_module().extract(content, "react").unwrap(), vec![1]);
    }

    #[test]
    fn typescript_generics() {
        let content = "import { Component } from '@angular/core';\n\nfunction identity<T>(value: T): T {\n  return value;\n}\n";
        assert_eq!(
            ts_module().extract(content, "@angular/core").unwrap(),
            vec![1]
        );
    }

    #[test]
    fn repeated_lines_are_deduplicated_and_sorted() {
        let content = "const a = require('pkg'); const b = require('pkg');\nimport('pkg');\n";
        assert_eq!(js_module().extract(content, "pkg").unwrap(), vec![1, 2]);
    }

    #[test]
    fn invalid_syntax_is_a_parse_error() {
        let err = js_module().extract("import from from from;", "from").unwrap_err();
        assert!(matches!(err, ExtractError::Parse { .. }));
    }

    #[test]
    fn extraction_is_idempotent() {
        let content = "import express from 'express';\nconst fastify = require('fastify');\n";
        let extractor = js_module();

        let first = extractor.extract(content, "express").unwrap();
        let second = extractor.extract(content, "express").unwrap();
        assert_eq!(first, second);
    }
}
