use armv4t_core::{Cpu, Memory};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A short loop of ARM data-processing instructions, looping back on
/// itself, as a rough throughput probe for `Cpu::step`.
fn arm_loop_program(mem: &mut Memory) {
    let base = 0x0800_0000u32;
    // ADD r0, r0, #1
    mem.write32(base, 0xE280_0001);
    // ADD r1, r1, #1
    mem.write32(base + 4, 0xE281_1001);
    // CMP r1, #1000
    mem.write32(base + 8, 0xE351_03E8);
    // BNE base (branch back two instructions)
    mem.write32(base + 12, 0x1AFF_FFFC);
}

fn bench_arm_step(c: &mut Criterion) {
    let mut mem = Memory::new();
    arm_loop_program(&mut mem);

    c.bench_function("arm_step_loop", |b| {
        b.iter(|| {
            let mut cpu = Cpu::new(0x0800_0000);
            for _ in 0..4000 {
                let _ = black_box(cpu.step(&mut mem));
            }
        })
    });
}

fn bench_thumb_step(c: &mut Criterion) {
    let mut mem = Memory::new();
    let base = 0x0800_0000u32;
    mem.write16(base, 0x1C40); // ADD r0, r0, #1
    mem.write16(base + 2, 0x1C49); // ADD r1, r1, #1
    mem.write16(base + 4, 0x29FF); // CMP r1, #0xFF
    mem.write16(base + 6, 0xD1FB); // BNE base

    c.bench_function("thumb_step_loop", |b| {
        b.iter(|| {
            let mut cpu = Cpu::new(0x0800_0000);
            cpu.registers_mut().set_thumb(true);
            for _ in 0..4000 {
                let _ = black_box(cpu.step(&mut mem));
            }
        })
    });
}

criterion_group!(benches, bench_arm_step, bench_thumb_step);
criterion_main!(benches);
