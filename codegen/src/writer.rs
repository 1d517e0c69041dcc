use crate::{CodeGenError, CodeGenResult};

/// A deferred source fragment: a closure that appends its text to the sink
/// when invoked. Fragments compose by sequencing and can be bound to
/// template slots.
pub type Writable<'a> = Box<dyn Fn(&mut SourceWriter) -> CodeGenResult<()> + 'a>;

pub fn writable<'a, F>(f: F) -> Writable<'a>
where
    F: Fn(&mut SourceWriter) -> CodeGenResult<()> + 'a,
{
    Box::new(f)
}

/// A value bound to a named template slot.
pub enum Slot<'a> {
    /// Inlined verbatim at the slot position.
    Text(String),
    /// Invoked at the slot position; whatever it writes lands there.
    Writable(Writable<'a>),
}

/// Append-only sink for generated source text.
#[derive(Default)]
pub struct SourceWriter {
    out: String,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
    }

    pub fn writeln(&mut self, line: impl AsRef<str>) {
        self.out.push_str(line.as_ref());
        self.out.push('\n');
    }

    /// Expands `template`, substituting each `#{name}` slot from `slots`.
    ///
    /// Slots are resolved left to right, so writable slots append exactly at
    /// the position where they appear. Unbound or unterminated slots are
    /// internal errors.
    pub fn template(&mut self, template: &str, slots: &[(&str, Slot<'_>)]) -> CodeGenResult<()> {
        let mut rest = template;
        while let Some(start) = rest.find("#{") {
            self.out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after.find('}').ok_or_else(|| {
                CodeGenError::InternalError(format!("Unterminated template slot: {}", &rest[start..]))
            })?;
            let name = &after[..end];
            let (_, slot) = slots
                .iter()
                .find(|(slot_name, _)| *slot_name == name)
                .ok_or_else(|| CodeGenError::InternalError(format!("Unbound template slot: {}", name)))?;
            match slot {
                Slot::Text(text) => self.out.push_str(text),
                Slot::Writable(fragment) => fragment(self)?,
            }
            rest = &after[end + 1..];
        }
        self.out.push_str(rest);
        Ok(())
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_substitutes_text_slots() {
        let mut w = SourceWriter::new();
        w.template(
            "pub struct #{name};\n",
            &[("name", Slot::Text("Thing".to_string()))],
        )
        .unwrap();
        assert_eq!(w.finish(), "pub struct Thing;\n");
    }

    #[test]
    fn template_invokes_writable_slots_in_place() {
        let mut w = SourceWriter::new();
        w.template(
            "before\n#{body}after\n",
            &[(
                "body",
                Slot::Writable(writable(|w| {
                    w.writeln("middle");
                    Ok(())
                })),
            )],
        )
        .unwrap();
        assert_eq!(w.finish(), "before\nmiddle\nafter\n");
    }

    #[test]
    fn template_rejects_unbound_slots() {
        let mut w = SourceWriter::new();
        let err = w.template("#{missing}", &[]).unwrap_err();
        assert!(matches!(err, CodeGenError::InternalError(_)));
    }

    #[test]
    fn template_rejects_unterminated_slots() {
        let mut w = SourceWriter::new();
        let err = w.template("#{oops", &[]).unwrap_err();
        assert!(matches!(err, CodeGenError::InternalError(_)));
    }
}
