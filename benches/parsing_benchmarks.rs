use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gcode_machine::dialect;
use gcode_machine::parser::{parse_block, words_from_text};
use gcode_machine::Machine;

/// Generate G-code content of different patterns for benchmarking
fn generate_gcode_lines(lines: usize, pattern: &str) -> Vec<String> {
    (0..lines)
        .map(|i| match pattern {
            "movement_heavy" => format!(
                "G1 X{:.3} Y{:.3} Z{:.3} F1500",
                (i as f32) * 0.1,
                (i as f32) * 0.2,
                (i as f32) * 0.05
            ),
            "modal_heavy" => format!("X{:.3} Y{:.3}", (i as f32) * 0.1, (i as f32) * 0.2),
            "mixed" => match i % 4 {
                0 => format!("G1 X{:.3} Y{:.3} F1500", (i as f32) * 0.1, (i as f32) * 0.2),
                1 => "G17 G21 G90".to_string(),
                2 => format!("M3 S{}", 8000 + (i % 50)),
                _ => format!("G0 Z{:.2}", (i as f32) * 0.1),
            },
            _ => unreachable!(),
        })
        .collect()
}

fn bench_tokenization(c: &mut Criterion) {
    let dialect = dialect::linuxcnc();
    let mut group = c.benchmark_group("tokenization");

    for pattern in ["movement_heavy", "mixed"] {
        let lines = generate_gcode_lines(1000, pattern);
        let bytes: usize = lines.iter().map(|l| l.len()).sum();
        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::new("1000_lines", pattern), &lines, |b, lines| {
            b.iter(|| {
                for line in lines {
                    black_box(words_from_text(&dialect, line).unwrap());
                }
            })
        });
    }
    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let dialect = dialect::linuxcnc();
    let lines = generate_gcode_lines(1000, "movement_heavy");

    c.bench_function("classify_1000_lines", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(parse_block(line, &dialect).unwrap());
            }
        })
    });
}

fn bench_machine_processing(c: &mut Criterion) {
    let mut lines = vec!["G1 X0 Y0".to_string()];
    lines.extend(generate_gcode_lines(999, "modal_heavy"));

    c.bench_function("process_1000_lines", |b| {
        b.iter(|| {
            let mut machine = Machine::new(dialect::linuxcnc()).unwrap();
            for line in &lines {
                machine.process_text(line).unwrap();
            }
            black_box(machine.position().unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_tokenization,
    bench_classification,
    bench_machine_processing
);
criterion_main!(benches);
