use bitbuf::{BitBuffer, BitReader, BitWriter, Endian};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const ITER: u64 = 1000;

fn writing(c: &mut Criterion) {
    let parameters: Vec<u32> = vec![1, 4, 6, 8, 11, 16, 24, 32, 48, 64];

    let mut group = c.benchmark_group("bit-writing");
    for i in parameters {
        group.throughput(Throughput::Bytes((u64::from(i) * ITER) / 8));

        for &endian in &[Endian::Little, Endian::Big] {
            let name = format!("{:?}", endian).to_lowercase();
            group.bench_with_input(BenchmarkId::new(name, i), &i, |b, param| {
                b.iter(|| {
                    let mut buf = BitBuffer::with_capacity((u64::from(*param) * ITER) as usize);
                    for x in 0..ITER {
                        buf.write_unsigned(*param, endian, black_box(x)).unwrap();
                    }
                    black_box(buf)
                })
            });
        }
    }

    group.finish();
}

fn reading(c: &mut Criterion) {
    let parameters: Vec<u32> = vec![1, 4, 6, 8, 11, 16, 24, 32, 48, 64];

    let mut group = c.benchmark_group("bit-reading");
    for i in parameters {
        group.throughput(Throughput::Bytes((u64::from(i) * ITER) / 8));

        for &endian in &[Endian::Little, Endian::Big] {
            let mut buf = BitBuffer::new();
            for x in 0..ITER {
                buf.write_unsigned(i, endian, x).unwrap();
            }

            let name = format!("{:?}", endian).to_lowercase();
            group.bench_with_input(BenchmarkId::new(name, i), &i, |b, param| {
                b.iter(|| {
                    buf.reset_to_start();
                    for _ in 0..ITER {
                        black_box(buf.read_unsigned(*param, endian).unwrap());
                    }
                })
            });
        }
    }

    group.finish();
}

fn bytes(c: &mut Criterion) {
    let data: Vec<u8> = (0..0x1000).map(|x| x as u8).collect();

    let mut group = c.benchmark_group("bytes");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("from-bytes", |b| {
        b.iter(|| black_box(BitBuffer::from_bytes(&data)))
    });

    let mut buf = BitBuffer::from_bytes(&data);
    group.bench_function("unaligned-read-bytes", |b| {
        let mut out = vec![0u8; data.len()];
        b.iter(|| {
            buf.set_position(3).unwrap();
            black_box(buf.read_bytes(&mut out).unwrap())
        })
    });

    group.bench_function("to-bytes", |b| b.iter(|| black_box(buf.to_bytes())));

    group.finish();
}

criterion_group!(benches, writing, reading, bytes);
criterion_main!(benches);
