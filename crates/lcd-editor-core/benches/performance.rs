use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use lcd_editor_core::{
    Command, CommandExecutor, CursorCommand, EditCommand, EditorConfig, EditorCore, ViewCommand,
};

const SAMPLE: &str = "The Quick Brown Fox Jumps Over The Lazy Dog";

fn bench_typing_full_buffer(c: &mut Criterion) {
    c.bench_function("typing/fill_41_chars", |b| {
        b.iter_batched(
            || EditorCore::new(EditorConfig::new(16)).unwrap(),
            |mut editor| {
                for ch in SAMPLE.chars() {
                    let _ = editor.insert(black_box(ch));
                }
                black_box(editor.cursor_render_pos());
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_typing_in_middle(c: &mut Criterion) {
    c.bench_function("typing/middle_20_inserts", |b| {
        b.iter_batched(
            || {
                let config = EditorConfig::new(16)
                    .with_max_buffer_length(64)
                    .with_initial_text(SAMPLE)
                    .with_initial_cursor(20);
                CommandExecutor::new(config).unwrap()
            },
            |mut executor| {
                for _ in 0..20 {
                    executor
                        .execute(Command::Edit(EditCommand::Insert { ch: 'X' }))
                        .unwrap();
                }
                black_box(executor.editor().render_len());
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_cursor_sweep(c: &mut Criterion) {
    let config = EditorConfig::new(16).with_initial_text(SAMPLE);
    let mut executor = CommandExecutor::new(config).unwrap();

    c.bench_function("cursor/sweep_home_end", |b| {
        b.iter(|| {
            executor
                .execute(Command::Cursor(CursorCommand::Home))
                .unwrap();
            for _ in 0..SAMPLE.len() {
                executor
                    .execute(Command::Cursor(CursorCommand::Right))
                    .unwrap();
            }
            black_box(executor.editor().cursor_screen_pos());
        })
    });
}

fn bench_screen_projection(c: &mut Criterion) {
    let config = EditorConfig::new(16)
        .with_initial_text(SAMPLE)
        .with_initial_cursor(10);
    let mut executor = CommandExecutor::new(config).unwrap();

    c.bench_function("screen/project_16_cells", |b| {
        b.iter(|| {
            let result = executor
                .execute(Command::View(ViewCommand::GetScreen))
                .unwrap();
            black_box(result);
        })
    });
}

criterion_group!(
    benches,
    bench_typing_full_buffer,
    bench_typing_in_middle,
    bench_cursor_sweep,
    bench_screen_projection
);
criterion_main!(benches);
