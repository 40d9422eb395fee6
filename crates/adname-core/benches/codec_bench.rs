use criterion::{black_box, criterion_group, criterion_main, Criterion};
use adname_core::codec::NameDecoder;
use adname_core::{encode, Angle, Category, CreativeFields, Creator, Format, Role, Variation};

fn bench_decode(c: &mut Criterion) {
    let decoder = NameDecoder::new().unwrap();

    let inputs = vec![
        "VI_SS_Ariana.Blossom_NK_UGC_V00_17.02.2026.mp4",
        "IA_AS_Ariana.Blossom_RG_Storytelling_V03_01.01.2030",
        "NC_TG_VI_SS_Rose.Gold_Hoop_ER_Customer.Testimonial_V12_17.02.2026.jpeg",
        "IC_CA_Pearl.Drop_ER_Behind.The.Scenes_V05_03.03.2026.png",
        "VI_SS_NK_UGC_V00_17.02.2026",
    ];

    c.bench_function("decode_single", |b| {
        b.iter(|| decoder.decode(black_box(inputs[0])));
    });

    c.bench_function("decode_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = decoder.decode(black_box(input));
            }
        });
    });
}

fn bench_encode(c: &mut Criterion) {
    let fields = CreativeFields {
        format: Some(Format::IA),
        creation: Some(Creator::AS),
        product: Some("Ariana Blossom".into()),
        category: Some(Category::RG),
        angle: Some(Angle::Storytelling),
        variation: Some(Variation::numbered(3).unwrap()),
        ..CreativeFields::new(Role::Designer)
    };

    c.bench_function("encode_designer", |b| {
        b.iter(|| encode(black_box(&fields), black_box("01.01.2030")));
    });
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
