use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use wcwidth_table_gen::bitmap::WidthBitmap;
use wcwidth_table_gen::eaw;
use wcwidth_table_gen::emit::{self, Language};

fn bench(c: &mut Criterion) {
    let reference = concat!(
        "# EastAsianWidth-15.1.0.txt\n",
        "\n",
        "0000..001F     ; N  # Cc    [32] <control-0000>..<control-001F>\n",
        "0020           ; Na # Zs         SPACE\n",
        "00A1           ; A  # Po         INVERTED EXCLAMATION MARK\n",
        "1100..115F     ; W  # Lo    [96] HANGUL CHOSEONG KIYEOK..HANGUL CHOSEONG FILLER\n",
        "20A9           ; H  # Sc         WON SIGN\n",
        "3000           ; F  # Zs         IDEOGRAPHIC SPACE\n",
        "4E00..9FFF     ; W  # Lo [20992] CJK UNIFIED IDEOGRAPH-4E00..CJK UNIFIED IDEOGRAPH-9FFF\n",
        "FF01..FF60     ; F  # Po    [96] FULLWIDTH EXCLAMATION MARK..FULLWIDTH RIGHT WHITE PARENTHESIS\n",
        "20000..2FFFD   ; W  # Lo [65534] CJK UNIFIED IDEOGRAPH-20000..<reserved-2FFFD>\n",
    );
    let input = reference.repeat(100);
    let records = eaw::parse_str(&input).unwrap();
    let (bitmap, _) = WidthBitmap::build(&records);

    let mut group = c.benchmark_group("eaw::parse");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("parse_str", |b| b.iter(|| eaw::parse_str(&input).unwrap()));
    group.finish();

    let mut group = c.benchmark_group("bitmap::WidthBitmap");
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("build", |b| b.iter(|| WidthBitmap::build(&records)));
    group.finish();

    let mut group = c.benchmark_group("emit::generate");
    group.bench_function("c", |b| b.iter(|| emit::generate(&bitmap, Language::C)));
    group.bench_function("rust", |b| b.iter(|| emit::generate(&bitmap, Language::Rust)));
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
