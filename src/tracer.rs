use numdescribe::Category;
use numdescribe::tracing::*;

use colored::Colorize;

/// Prints the classification cascade as an indented tree once the outermost number is described.
#[derive(Default)]
pub struct TextTracer {
    rec: Vec<PreTraced>,
}

struct PreTraced {
    input: String,
    category: Option<Category>,
    steps: Vec<Traced>,
}

pub struct Traced {
    input: String,
    category: Option<Category>,
    steps: Vec<Traced>,
    output: String,
}

impl Tracer for TextTracer {
    fn log(&mut self, ev: Event<'_>) {
        match ev {
            Event::Enter(z) =>
                self.rec.push(PreTraced {
                    input: z.to_string(),
                    category: None,
                    steps: Vec::new(),
                }),
            Event::Classified(cat) => {
                if let Some(pt) = self.rec.last_mut() {
                    pt.category = Some(cat);
                }
            },
            Event::Leave(desc) => {
                let pt = self.rec.pop().expect("unbalanced tracer calls");
                let t = Traced {
                    input: pt.input,
                    category: pt.category,
                    steps: pt.steps,
                    output: desc.to_string(),
                };
                match self.rec.last_mut() {
                    Some(tt) => tt.steps.push(t),
                    None => Self::writeout(t)
                }
            }
        }
    }
}

impl TextTracer {
    fn writeout(t: Traced) {
        for line in Self::render(t, 0) {
            println!("{}", Self::styled(&line));
        }
    }

    /// One line per node, a node with children closing with its own `=> output` line.
    fn render(t: Traced, level: usize) -> Vec<String> {
        let indent = "  ".repeat(level);
        let head = match t.category {
            Some(cat) => format!("{indent}[-] {}: {cat}", t.input),
            None => format!("{indent}[-] {}", t.input)
        };
        if t.steps.is_empty() {
            return vec![format!("{head} => {}", t.output)];
        }
        let mut lines = vec![head];
        for tt in t.steps {
            lines.extend(Self::render(tt, level + 1));
        }
        lines.push(format!("{indent}  => {}", t.output));
        lines
    }

    fn styled(s: &str) -> String {
        s.dimmed().to_string()
    }
}
