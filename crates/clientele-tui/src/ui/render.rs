use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, LoginFocus};

use super::styles;

/// Width of the login card, including borders
const CARD_WIDTH: u16 = 46;

/// Visible width of the username and password fields
const FIELD_WIDTH: usize = 20;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render(frame: &mut Frame, app: &App) {
    let lines = login_lines(app);
    // Lines plus top and bottom border
    let height = lines.len() as u16 + 2;
    let area = centered_rect_fixed(CARD_WIDTH, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style())
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

/// Build the login card's contents from the current state
pub fn login_lines(app: &App) -> Vec<Line<'static>> {
    let form = app.form();
    let mut lines = vec![
        Line::from(Span::styled("               Clientele", styles::title_style())),
        Line::from(Span::styled(
            "  Login with your Clientbook credentials.",
            styles::muted_style(),
        )),
        Line::from(""),
    ];

    lines.push(field_line(
        "Username",
        form.username().to_string(),
        app.login_focus == LoginFocus::Username,
    ));

    let masked = "*".repeat(form.password().chars().count());
    lines.push(field_line(
        "Password",
        masked,
        app.login_focus == LoginFocus::Password,
    ));

    lines.push(Line::from(""));
    lines.push(button_line(app));

    if let Some(error) = form.error() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            styles::error_style(),
        )));
    } else if let Some(ref status) = app.status_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", status),
            styles::success_style(),
        )));
    }

    lines
}

fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::field_style()
    };

    // Keep the tail visible once the value outgrows the field
    let skip = value.chars().count().saturating_sub(FIELD_WIDTH);
    let visible: String = value.chars().skip(skip).collect();
    let cursor = if focused { "▌" } else { " " };

    Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("{}: [", label), styles::muted_style()),
        Span::styled(format!("{:<width$}{}", visible, cursor, width = FIELD_WIDTH), style),
        Span::styled("]", styles::muted_style()),
    ])
}

fn button_line(app: &App) -> Line<'static> {
    let form = app.form();
    let focused = app.login_focus == LoginFocus::Button;

    let (label, style) = if form.is_submitting() {
        let frame = SPINNER_FRAMES[app.tick % SPINNER_FRAMES.len()];
        (format!("  {} Signing in  ", frame), styles::disabled_button_style())
    } else if !form.can_submit() {
        ("    Sign In     ".to_string(), styles::disabled_button_style())
    } else if focused {
        ("  ▶ Sign In ◀   ".to_string(), styles::button_style(true))
    } else {
        ("    Sign In     ".to_string(), styles::button_style(false))
    };

    Line::from(vec![
        Span::raw("             ["),
        Span::styled(label, style),
        Span::raw("]"),
    ])
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientele_core::AuthConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        App::new(&AuthConfig::with_login_url("not a url")).expect("app builds")
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn button_span_style(app: &App) -> Style {
        let lines = login_lines(app);
        let button = lines
            .iter()
            .find(|l| line_text(l).contains("Sign"))
            .expect("button line present");
        button.spans[1].style
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("test terminal");
        terminal.draw(|f| render(f, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_button_disabled_until_both_fields_filled() {
        let mut app = test_app();
        assert_eq!(button_span_style(&app), styles::disabled_button_style());

        app.form_mut().set_username("ada");
        assert_eq!(button_span_style(&app), styles::disabled_button_style());

        app.form_mut().set_password("hunter2");
        assert_eq!(button_span_style(&app), styles::button_style(false));

        app.login_focus = LoginFocus::Button;
        assert_eq!(button_span_style(&app), styles::button_style(true));
    }

    #[test]
    fn test_password_is_masked() {
        let mut app = test_app();
        app.form_mut().set_username("ada");
        app.form_mut().set_password("hunter2");

        let text: String = login_lines(&app).iter().map(line_text).collect();
        assert!(text.contains("ada"));
        assert!(text.contains("*******"));
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn test_long_username_shows_tail() {
        let mut app = test_app();
        app.form_mut().set_username("someone.with.a.long.name@example.com");

        let text: String = login_lines(&app).iter().map(line_text).collect();
        assert!(text.contains("g.name@example.com"));
    }

    #[tokio::test]
    async fn test_error_rendered_after_failure() {
        let mut app = test_app();
        app.form_mut().set_username("ada");
        app.form_mut().set_password("hunter2");
        app.submit();
        assert!(screen_text(&app).contains("Signing in"));

        for _ in 0..100 {
            app.check_background_tasks();
            if !app.form().is_submitting() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        let screen = screen_text(&app);
        assert!(screen.contains("Invalid server URL"));
        assert!(screen.contains("Sign In"));
    }

    #[test]
    fn test_render_fits_small_terminal() {
        let app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).expect("test terminal");
        terminal.draw(|f| render(f, &app)).expect("draw");
    }
}
