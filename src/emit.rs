use crate::config::{GeneratorConfig, StorageScope};
use crate::corpus::Corpus;
use crate::fixture::{shared_cell_name, AggregateSpec, MemberKind, MemberSpec};

pub const BANNER: &str = "// Generated by reflexgen. Do not edit.";

/// Render a `Corpus` as the C++ fragment included by the test harness.
pub fn emit_corpus(corpus: &Corpus, config: &GeneratorConfig) -> String {
    let mut em = Emitter::new(config.storage_scope);
    em.emit_corpus(corpus, config);
    em.buf
}

/// Render a single aggregate definition (no shared-cell table, no type list).
pub fn emit_aggregate(spec: &AggregateSpec, scope: StorageScope) -> String {
    let mut em = Emitter::new(scope);
    em.emit_aggregate(spec);
    em.buf
}

struct Emitter {
    buf: String,
    indent: usize,
    scope: StorageScope,
}

impl Emitter {
    fn new(scope: StorageScope) -> Self {
        Self {
            buf: String::new(),
            indent: 0,
            scope,
        }
    }

    fn write(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    fn newline(&mut self) {
        self.buf.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.buf.push('\t');
        }
    }

    fn line(&mut self, s: &str) {
        self.write_indent();
        self.write(s);
        self.newline();
    }

    fn indent(&mut self) {
        self.indent += 1;
    }

    fn dedent(&mut self) {
        self.indent -= 1;
    }

    // ── Corpus ───────────────────────────────────────────────────────

    fn emit_corpus(&mut self, corpus: &Corpus, config: &GeneratorConfig) {
        self.line(BANNER);

        if self.scope == StorageScope::Global {
            let positions = corpus.shared_positions();
            if !positions.is_empty() {
                self.newline();
                for position in positions {
                    self.line(&format!(
                        "inline int {} = {};",
                        shared_cell_name(position),
                        position
                    ));
                }
            }
        }

        for spec in &corpus.aggregates {
            self.newline();
            self.emit_aggregate(spec);
        }

        self.newline();
        self.line(&format!(
            "using {} = {}<{}>;",
            config.type_list_alias,
            config.harness_template,
            corpus.type_list()
        ));
    }

    // ── Aggregate ────────────────────────────────────────────────────

    fn emit_aggregate(&mut self, spec: &AggregateSpec) {
        self.line(&format!("struct {}", spec.name()));
        self.line("{");
        self.indent();

        self.line(&format!(
            "static constexpr std::size_t member_count = {};",
            spec.member_count()
        ));
        self.newline();
        self.emit_accessor(spec);
        self.newline();
        for member in &spec.members {
            self.emit_member(member);
        }

        self.dedent();
        self.line("};");
    }

    fn emit_accessor(&mut self, spec: &AggregateSpec) {
        self.line("template<std::size_t I>");
        self.line("auto get() -> decltype(auto) requires (I < member_count)");
        self.line("{");
        self.indent();
        for branch in spec.accessor().branches {
            self.line(&format!("if constexpr (I == {})", branch.index));
            self.indent();
            self.line(&format!("return v{};", branch.position));
            self.dedent();
        }
        self.dedent();
        self.line("}");
    }

    fn emit_member(&mut self, member: &MemberSpec) {
        match member.kind {
            MemberKind::OwnedValue => {
                self.line(&format!(
                    "int {} = {};",
                    member.field_name(),
                    member.initial_value()
                ));
            }
            MemberKind::SharedAlias => {
                if self.scope == StorageScope::PerAggregate {
                    self.line(&format!(
                        "static inline int {} = {};",
                        member.cell_name(),
                        member.initial_value()
                    ));
                }
                self.line(&format!("int& {} = {};", member.field_name(), member.cell_name()));
            }
        }
    }
}
