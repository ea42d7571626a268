//! End-to-end interpreter tests against the recording backend. The
//! recording backend measures text as `0.6 * size` per character, so
//! with the default 12 pt font a character is 7.2 pt wide and a line
//! is 16 pt high.

mod common;

use common::{TestResult, init_logging, run_recorded};
use pagescript::{DrawEvent, FormControl, RunError, ScriptError};
use pagescript_types::{FontFamily, FontStyle, color};

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn unpositioned_print_stacks_below_the_previous_block() -> TestResult {
    init_logging();
    let (backend, _) = run_recorded(r#"print @ 50,800 width 100 "hello world". print "next"."#)?;

    let texts = backend.texts();
    assert_eq!(texts.len(), 2);
    let DrawEvent::Text { x, y, text, .. } = texts[0] else { unreachable!() };
    assert_eq!(text, "hello world");
    assert_close(*x, 50.0);
    assert_close(*y, 800.0);
    // One drawn line, cursor drops by lineHeight * (lines + 1).
    let DrawEvent::Text { x, y, text, .. } = texts[1] else { unreachable!() };
    assert_eq!(text, "next");
    assert_close(*x, 50.0);
    assert_close(*y, 800.0 - 16.0 * 2.0);
    Ok(())
}

#[test]
fn dots_inside_literals_do_not_split_statements() -> TestResult {
    init_logging();
    let (backend, _) = run_recorded(r#"print "a.b". print """x.y"""."#)?;

    let texts = backend.texts();
    assert_eq!(texts.len(), 2);
    let DrawEvent::Text { text, .. } = texts[0] else { unreachable!() };
    assert_eq!(text, "a.b");
    let DrawEvent::Text { text, .. } = texts[1] else { unreachable!() };
    assert_eq!(text, "x.y");
    Ok(())
}

#[test]
fn right_alignment_offsets_within_the_width_budget() -> TestResult {
    init_logging();
    let (backend, _) = run_recorded(r#"print @ 50,800 width 100 alignment right "hi"."#)?;

    let DrawEvent::Text { x, .. } = backend.texts()[0] else { unreachable!() };
    // "hi" measures 2 * 7.2 = 14.4; right-justified in 100.
    assert_close(*x, 50.0 + (100.0 - 14.4));
    Ok(())
}

#[test]
fn width_budget_wraps_at_whitespace() -> TestResult {
    init_logging();
    let (backend, _) = run_recorded(r#"print @ 50,800 width 80 "aaaa bbbb cccc"."#)?;

    let texts = backend.texts();
    assert_eq!(texts.len(), 2);
    let DrawEvent::Text { text, y, .. } = texts[0] else { unreachable!() };
    assert_eq!(text, "aaaa bbbb");
    assert_close(*y, 800.0);
    let DrawEvent::Text { text, y, .. } = texts[1] else { unreachable!() };
    assert_eq!(text, "cccc");
    assert_close(*y, 784.0);
    Ok(())
}

#[test]
fn escaped_newline_forces_a_paragraph_break() -> TestResult {
    init_logging();
    let (backend, _) = run_recorded(r#"print @ 50,800 width 200 "a\nb"."#)?;

    // A paragraph break renders as an explicit empty line.
    let texts = backend.texts();
    assert_eq!(texts.len(), 3);
    let DrawEvent::Text { text, .. } = texts[1] else { unreachable!() };
    assert_eq!(text, "");
    let DrawEvent::Text { text, y, .. } = texts[2] else { unreachable!() };
    assert_eq!(text, "b");
    assert_close(*y, 800.0 - 32.0);
    Ok(())
}

#[test]
fn unknown_escape_is_a_syntax_error() {
    init_logging();
    let err = run_recorded(r#"print "a\qb"."#).unwrap_err();
    assert!(matches!(
        err,
        RunError::Statement { index: 1, source: ScriptError::Syntax(_) }
    ));
}

#[test]
fn table_draws_grid_and_advances_cursor() -> TestResult {
    init_logging();
    let (backend, _) =
        run_recorded(r#"table columns 2 rows 2 width 60,60 height 20,20. print "below"."#)?;

    let rects: Vec<_> = backend
        .events
        .iter()
        .filter_map(|e| match e {
            DrawEvent::Rect { rect, fill, stroke } => Some((rect, fill, stroke)),
            _ => None,
        })
        .collect();
    assert_eq!(rects.len(), 2);
    // Background fill then stroked border, both over the full grid.
    let (rect, fill, stroke) = &rects[0];
    assert_eq!(**fill, Some(color::WHITE));
    assert!(stroke.is_none());
    assert_close(rect.x, 50.0);
    assert_close(rect.y, 792.0 - 40.0);
    assert_close(rect.width, 120.0);
    assert_close(rect.height, 40.0);
    let (_, fill, stroke) = &rects[1];
    assert!(fill.is_none());
    assert_eq!(**stroke, Some((color::BLACK, 2.0)));

    // One interior column boundary and one interior row boundary.
    let lines: Vec<_> = backend
        .events
        .iter()
        .filter(|e| matches!(e, DrawEvent::Line { .. }))
        .collect();
    assert_eq!(lines.len(), 2);

    // The cursor lands 10 pt under the table.
    let DrawEvent::Text { y, .. } = backend.texts()[0] else { unreachable!() };
    assert_close(*y, 792.0 - 40.0 - 10.0);
    Ok(())
}

#[test]
fn cell_positioning_fails_after_nextpage_clears_the_table() {
    init_logging();
    let err = run_recorded(
        r#"table columns 1 rows 1 width 60 height 20. nextpage. print @cell 0,0 "x"."#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        RunError::Statement { index: 3, source: ScriptError::State(_) }
    ));
}

#[test]
fn out_of_range_cell_is_a_state_error() {
    init_logging();
    let err = run_recorded(
        r#"table columns 1 rows 1 width 60 height 20. print @cell 4,0 "x"."#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        RunError::Statement { index: 2, source: ScriptError::State(_) }
    ));
}

#[test]
fn radio_widgets_share_a_group_and_mark_the_selected_export() -> TestResult {
    init_logging();
    let (backend, _) = run_recorded(
        r#"control @ 50,700 type radio group "color" content "red" selected "red".
           control @ 50,660 type radio group "color" content "blue" selected "red"."#,
    )?;

    let fields: Vec<_> = backend
        .events
        .iter()
        .filter_map(|e| match e {
            DrawEvent::FormField { control, rect } => Some((control, rect)),
            _ => None,
        })
        .collect();
    assert_eq!(fields.len(), 2);
    let (control, rect) = &fields[0];
    assert_eq!(
        **control,
        FormControl::Radio {
            group: "color".to_string(),
            export: "red".to_string(),
            selected: true,
        }
    );
    // Radio boxes are square.
    assert_close(rect.width, rect.height);
    let (control, _) = &fields[1];
    assert_eq!(
        **control,
        FormControl::Radio {
            group: "color".to_string(),
            export: "blue".to_string(),
            selected: false,
        }
    );
    Ok(())
}

#[test]
fn dropdown_options_come_from_the_token_after_the_type() -> TestResult {
    init_logging();
    let (backend, _) =
        run_recorded(r#"control @ 50,700 type dropdown "One;Two;Three" content "Two"."#)?;

    let DrawEvent::FormField { control, .. } = &backend.events[1] else { unreachable!() };
    assert_eq!(
        *control,
        FormControl::Dropdown {
            options: vec!["One".to_string(), "Two".to_string(), "Three".to_string()],
            value: Some("Two".to_string()),
        }
    );
    Ok(())
}

#[test]
fn checkbox_accepts_the_legacy_option_name() -> TestResult {
    init_logging();
    let (backend, _) = run_recorded(r#"control @ 50,700 type option content "1"."#)?;

    let DrawEvent::FormField { control, .. } = &backend.events[1] else { unreachable!() };
    assert_eq!(*control, FormControl::CheckBox { checked: true });
    Ok(())
}

#[test]
fn unknown_command_aborts_with_its_statement_index() {
    init_logging();
    let err = run_recorded(r#"print "ok". dance "now"."#).unwrap_err();
    match err {
        RunError::Statement { index, source: ScriptError::Argument(msg) } => {
            assert_eq!(index, 2);
            assert!(msg.contains("dance"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn output_statement_controls_the_finalize_path() -> TestResult {
    init_logging();
    let (backend, path) = run_recorded(r#"output "custom-report.pdf". print "x"."#)?;

    assert_eq!(path.to_str(), Some("custom-report.pdf"));
    assert!(backend.events.iter().any(|e| matches!(
        e,
        DrawEvent::Finalize { path } if path.to_str() == Some("custom-report.pdf")
    )));
    Ok(())
}

#[test]
fn oversize_table_forces_a_page_break_first() -> TestResult {
    init_logging();
    let (backend, _) = run_recorded(
        r#"print @ 50,100 "low". table columns 1 rows 1 width 50 height 100."#,
    )?;

    assert_eq!(backend.page_count(), 2);
    // The table anchors at the fresh page's cursor home.
    let DrawEvent::Rect { rect, .. } = backend
        .events
        .iter()
        .find(|e| matches!(e, DrawEvent::Rect { .. }))
        .unwrap()
    else {
        unreachable!()
    };
    assert_close(rect.x, 50.0);
    assert_close(rect.y, 792.0 - 100.0);
    Ok(())
}

#[test]
fn too_wide_table_is_scaled_to_the_printable_width() -> TestResult {
    init_logging();
    let (backend, _) = run_recorded(r#"table columns 2 rows 1 width 300,300 height 20."#)?;

    let DrawEvent::Rect { rect, .. } = &backend.events[1] else { unreachable!() };
    // 595 - 2 * 50 margin.
    assert_close(rect.width, 495.0);
    Ok(())
}

#[test]
fn repeat_last_width_shorthand_pads_the_column_list() -> TestResult {
    init_logging();
    let (backend, _) = run_recorded(r#"table columns 4 rows 1 width 40,60* height 20."#)?;

    let DrawEvent::Rect { rect, .. } = &backend.events[1] else { unreachable!() };
    assert_close(rect.width, 40.0 + 60.0 * 3.0);
    Ok(())
}

#[test]
fn image_keeps_natural_size_and_drops_the_cursor_a_fixed_step() -> TestResult {
    init_logging();
    let (backend, _) = run_recorded(r#"image @ 50,700 "logo.png". print "after"."#)?;

    let DrawEvent::Image { rect, .. } = &backend.events[1] else { unreachable!() };
    // The recording backend reports 100x100 for every image.
    assert_close(rect.x, 50.0);
    assert_close(rect.y, 600.0);
    assert_close(rect.width, 100.0);
    assert_close(rect.height, 100.0);

    let DrawEvent::Text { y, .. } = backend.texts()[0] else { unreachable!() };
    assert_close(*y, 700.0 - 10.0);
    Ok(())
}

#[test]
fn lenient_fallbacks_keep_the_run_alive() -> TestResult {
    init_logging();
    let (backend, _) = run_recorded(
        r#"font size 10 style wavy colour turquoise9000 "Times New Roman". print "t"."#,
    )?;

    let DrawEvent::Text { font, size, color, .. } = backend.texts()[0] else { unreachable!() };
    assert_eq!(font.family, FontFamily::Times);
    assert_eq!(font.style, FontStyle::Regular);
    assert_close(*size, 10.0);
    assert_eq!(*color, color::BLACK);
    Ok(())
}

#[test]
fn print_in_a_cell_uses_the_cell_anchor_and_width() -> TestResult {
    init_logging();
    let (backend, _) = run_recorded(
        r#"print @ 50,800 "move cursor". table columns 2 rows 1 width 80,80 height 30. print @cell 1,0 "cell text"."#,
    )?;

    let table_top = 800.0 - 16.0 * 2.0;
    let texts = backend.texts();
    let DrawEvent::Text { x, y, .. } = texts[1] else { unreachable!() };
    // Column 1 starts at 50 + 80; inset 3 in from the left, 5 under the top.
    assert_close(*x, 50.0 + 80.0 + 3.0);
    assert_close(*y, table_top - 5.0);
    Ok(())
}
