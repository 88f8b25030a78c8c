use postdeck_config::Axis;
use postdeck_engine::{PostLink, Slide};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, ImageViewer, OpenPost, Screen};

pub fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    if let Screen::List = app.screen {
        render_post_list(f, app, rows[0]);
        render_help(f, rows[1], "q: Quit | ↑/k: Previous | ↓/j: Next | Enter: Open");
        return;
    }

    match &app.screen {
        Screen::List => {}
        Screen::NotFound(slug) => {
            render_not_found(f, slug, rows[0]);
            render_help(f, rows[1], "q: Quit | Esc/b: Post list");
        }
        Screen::Post(open) => {
            render_open_post(f, open, app.deck_config.axis, app.deck_config.show_progress, rows[0]);
            render_help(
                f,
                rows[1],
                "q: Quit | ↑↓←→/hjkl: Slides | Enter: View image | o: Older | n: Newer | Esc/b: Post list",
            );
        }
    }
}

fn render_post_list(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = app
        .posts
        .posts()
        .iter()
        .map(|post| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>10}  ", post.display_date()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(post.title.clone()),
            ]))
        })
        .collect();

    let title = format!("Posts ({})", app.posts_path.display());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    let preview = match app.list_state.selected().and_then(|i| app.posts.get(i)) {
        Some(post) => {
            let sections = post.sections();
            let images = sections.iter().filter(|s| s.image().is_some()).count();
            let mut lines = vec![
                Line::styled(post.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Line::styled(post.display_date(), Style::default().fg(Color::DarkGray)),
                Line::from(""),
                Line::from(format!("{} sections, {images} images", sections.len())),
            ];
            if let Some(song) = &post.song {
                lines.push(Line::from(format!("♪ {song}")));
            }
            if let Some(first) = sections.first() {
                lines.push(Line::from(""));
                lines.push(Line::from(first.text().to_string()));
            }
            lines
        }
        None => vec![Line::from("No posts found")],
    };

    let preview = Paragraph::new(preview)
        .block(Block::default().borders(Borders::ALL).title("Preview"))
        .wrap(Wrap { trim: true });
    f.render_widget(preview, chunks[1]);
}

fn render_not_found(f: &mut Frame, slug: &str, area: Rect) {
    let text = vec![
        Line::styled("Post not found", Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!("We couldn't find a post called `{slug}`.")),
    ];
    let para = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}

fn render_open_post(f: &mut Frame, open: &OpenPost, axis: Axis, show_progress: bool, area: Rect) {
    let deck = &open.deck;
    let (slide_area, progress_area) = match (show_progress, axis) {
        (false, _) => (area, None),
        (true, Axis::Vertical) => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(2)])
                .split(area);
            (cols[0], Some(cols[1]))
        }
        (true, Axis::Horizontal) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(area);
            (rows[0], Some(rows[1]))
        }
    };

    let title = format!("Slide {}/{}", deck.active() + 1, deck.len());
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(slide_area);
    f.render_widget(block, slide_area);
    render_slide(f, deck.active_slide(), axis, inner);

    if let Some(progress_area) = progress_area {
        render_progress(f, deck.progress(), axis, progress_area);
    }

    if let Some(viewer) = &open.viewer {
        render_viewer(f, viewer, area);
    }
}

fn render_slide(f: &mut Frame, slide: &Slide, axis: Axis, area: Rect) {
    match slide {
        Slide::Title {
            title,
            date,
            thumbnail,
            song,
        } => {
            let mut lines = vec![
                Line::styled(title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Line::styled(date.clone(), Style::default().fg(Color::DarkGray)),
                Line::from(""),
            ];
            if let Some(thumbnail) = thumbnail {
                lines.push(Line::from(format!("🖼  {thumbnail}")));
            }
            if let Some(song) = song {
                lines.push(Line::from(format!("♪ {song}")));
            }
            render_centered(f, lines, area);
        }
        Slide::Text { text } => {
            let para = Paragraph::new(text.clone()).wrap(Wrap { trim: false });
            f.render_widget(para, area);
        }
        Slide::Image { image, caption } => {
            // Image beside its caption, or above it when slides run sideways
            let direction = match axis {
                Axis::Vertical => Direction::Horizontal,
                Axis::Horizontal => Direction::Vertical,
            };
            let halves = Layout::default()
                .direction(direction)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);

            let image_lines = if image.src.is_empty() {
                vec![Line::from("(no image)")]
            } else {
                vec![
                    Line::styled(image.alt.clone(), Style::default().add_modifier(Modifier::ITALIC)),
                    Line::styled(image.src.clone(), Style::default().fg(Color::Cyan)),
                ]
            };
            let image_box = Paragraph::new(image_lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Image"));
            f.render_widget(image_box, halves[0]);

            let caption = Paragraph::new(caption.clone()).wrap(Wrap { trim: false });
            f.render_widget(caption, halves[1]);
        }
        Slide::Footer { older, newer } => {
            let link = |label: &str, link: &Option<PostLink>| match link {
                Some(link) => Span::raw(format!("{label} {}", link.title)),
                None => Span::styled(label.to_string(), Style::default().fg(Color::DarkGray)),
            };
            let lines = vec![Line::from(vec![
                link("← o: Older", older),
                Span::raw("    ≡ b: Posts    "),
                link("n: Newer →", newer),
            ])];
            render_centered(f, lines, area);
        }
    }
}

fn render_centered(f: &mut Frame, lines: Vec<Line<'static>>, area: Rect) {
    let height = lines.len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, rows[1]);
}

fn render_progress(f: &mut Frame, progress: f64, axis: Axis, area: Rect) {
    let progress = progress.clamp(0.0, 1.0);
    match axis {
        Axis::Horizontal => {
            let gauge = Gauge::default()
                .ratio(progress)
                .label("")
                .gauge_style(Style::default().fg(Color::White).bg(Color::DarkGray));
            f.render_widget(gauge, area);
        }
        Axis::Vertical => {
            let filled = (progress * f64::from(area.height)).round() as u16;
            let lines: Vec<Line> = (0..area.height)
                .map(|row| if row < filled { Line::from(" █") } else { Line::from(" │") })
                .collect();
            f.render_widget(Paragraph::new(lines), area);
        }
    }
}

fn render_viewer(f: &mut Frame, viewer: &ImageViewer, area: Rect) {
    let popup = centered_rect(60, 30, area);
    f.render_widget(Clear, popup);
    let para = Paragraph::new(vec![
        Line::from(""),
        Line::styled(viewer.src.clone(), Style::default().fg(Color::Cyan)),
        Line::from(""),
        Line::styled("Esc to close", Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Full resolution"));
    f.render_widget(para, popup);
}

fn render_help(f: &mut Frame, area: Rect, text: &'static str) {
    f.render_widget(Paragraph::new(Line::from(text)), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
