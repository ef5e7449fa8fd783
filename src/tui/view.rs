//! Draws one formula editor: the token line with the input box at the cursor, the current
//! serialized formula, and a status line.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::kernel::services::ports::OutputSink;
use crate::kernel::{FormulaEditor, InputFeedback};
use crate::models::{formula_to_string, Container, FormulaTree, NodeId, RenderSlot, TokenView};

fn input_style(feedback: InputFeedback) -> Style {
    match feedback {
        InputFeedback::None => Style::default().add_modifier(Modifier::REVERSED),
        InputFeedback::Match => Style::default().fg(Color::Black).bg(Color::Green),
        InputFeedback::Error => Style::default().fg(Color::White).bg(Color::Red),
    }
}

fn token_style(invalid: bool) -> Style {
    if invalid {
        Style::default().fg(Color::Red).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
    }
}

/// Token line in logical order. The first invalid token is highlighted.
pub fn formula_line<S: OutputSink>(editor: &FormulaEditor<S>) -> Line<'static> {
    let tree = editor.tree();
    let invalid = tree.first_invalid();
    let input = editor.input();
    let input_span = Span::styled(
        format!("{:^width$}", input.text(), width = input.display_width()),
        input_style(input.feedback()),
    );

    let mut spans = Vec::new();
    push_container(tree, Container::Root, invalid, &input_span, &mut spans);
    Line::from(spans)
}

fn push_container(
    tree: &FormulaTree,
    container: Container,
    invalid: Option<NodeId>,
    input_span: &Span<'static>,
    spans: &mut Vec<Span<'static>>,
) {
    for (idx, slot) in tree.render_elements(container).into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }

        let id = match slot {
            RenderSlot::Cursor => {
                spans.push(input_span.clone());
                continue;
            }
            RenderSlot::Token(id) => id,
        };
        let Some(token) = tree.token(id) else {
            continue;
        };
        let style = token_style(invalid == Some(id));

        if token.is_container() {
            spans.push(Span::styled("(", style));
            push_container(tree, Container::Node(id), invalid, input_span, spans);
            spans.push(Span::styled(")", style));
            continue;
        }

        let view = TokenView {
            value: token.value,
            attrs: token.attrs,
            children: None,
        };
        let text = token
            .token_type
            .render(&view)
            .unwrap_or_else(|| token.value.unwrap_or_default().to_string());
        spans.push(Span::styled(text, style));
    }
}

pub fn status_line<S: OutputSink>(editor: &FormulaEditor<S>, last_log: Option<&str>) -> Line<'static> {
    let tree = editor.tree();
    let (label, color) = if tree.is_valid() {
        ("valid", Color::Green)
    } else {
        ("invalid", Color::Red)
    };

    let mut spans = vec![
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(format!("  {} tokens", tree.node_count())),
    ];
    if tree.has_pending_output() {
        spans.push(Span::raw("  *"));
    }
    if let Some(line) = last_log {
        spans.push(Span::styled(
            format!("  {line}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

pub fn render<S: OutputSink>(
    frame: &mut Frame,
    area: Rect,
    editor: &FormulaEditor<S>,
    last_log: Option<&str>,
) {
    let [formula_area, json_area, status_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let formula = Paragraph::new(formula_line(editor))
        .block(Block::default().borders(Borders::ALL).title("formula"))
        .wrap(Wrap { trim: false });
    frame.render_widget(formula, formula_area);

    let json = formula_to_string(&editor.get_formula()).unwrap_or_default();
    let json = Paragraph::new(json)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("json"));
    frame.render_widget(json, json_area);

    frame.render_widget(Paragraph::new(status_line(editor, last_log)), status_area);
}

#[cfg(test)]
#[path = "../../tests/unit/tui/view.rs"]
mod tests;
