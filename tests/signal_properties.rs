use std::cell::Cell;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use tincture::interpolation::lerp_possible;
use tincture::{Color, ColorComponents, PossibleValue, SignalContext, Signalable, WorkingSpace};

const SAMPLES: usize = 200;

fn rng() -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(0x7121_c7a3)
}

fn random_color(rng: &mut Xoshiro256PlusPlus) -> Color {
    Color::from_rgba(rng.gen(), rng.gen(), rng.gen(), rng.gen_range(0.0..=1.0))
}

fn random_opaque_color(rng: &mut Xoshiro256PlusPlus) -> Color {
    Color::from_rgb(rng.gen(), rng.gen(), rng.gen())
}

#[test]
fn parse_of_serialize_is_identity() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let color = random_color(&mut rng);
        let text = color.serialize();
        assert_eq!(Ok(color.clone()), Color::parse(text.clone().into()), "{text}");
    }

    for _ in 0..SAMPLES {
        let value: f64 = rng.gen_range(-1e6..1e6);
        assert_eq!(Ok(value), f64::parse(value.serialize().into()));
    }
}

#[test]
fn all_input_shapes_agree() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let color = random_opaque_color(&mut rng);
        let rgba = color.to_rgba();

        let from_text = Color::parse(color.to_rgb_hex_string(true).into());
        let from_number = Color::parse(rgba.to_u32().into());
        let from_components = Color::parse(
            ColorComponents::new(rgba.r.into(), rgba.g.into(), rgba.b.into()).into(),
        );
        let from_value = Color::parse(PossibleValue::Value(color.clone()));

        assert_eq!(Ok(color.clone()), from_text);
        assert_eq!(Ok(color.clone()), from_number);
        assert_eq!(Ok(color.clone()), from_components);
        assert_eq!(Ok(color), from_value);
    }
}

#[test]
fn interpolating_a_color_with_itself_is_identity() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let color = random_color(&mut rng);
        let progress = rng.gen_range(0.0..=1.0);

        for space in WorkingSpace::ALL {
            assert_eq!(
                color,
                Color::lerp(Some(&color), Some(&color), progress, space),
                "{color} in {space} at {progress}"
            );
        }
    }
}

#[test]
fn interpolation_hits_endpoints() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let from = random_color(&mut rng);
        let to = random_color(&mut rng);

        for space in WorkingSpace::ALL {
            assert_eq!(from, from.lerp_to(&to, 0.0, space), "{from} -> {to} in {space}");
            assert_eq!(to, from.lerp_to(&to, 1.0, space), "{from} -> {to} in {space}");
        }
    }
}

#[test]
fn missing_endpoint_fades() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let color = random_opaque_color(&mut rng);

        for space in WorkingSpace::ALL {
            let faded = Color::lerp(None, Some(&color), 0.0, space);
            assert_eq!(color.with_alpha(0.0), faded);
            assert_eq!(color, Color::lerp(None, Some(&color), 1.0, space));

            let mut last_alpha = -1.0;
            for step in 0..=10 {
                let progress = f64::from(step) / 10.0;
                let alpha = Color::lerp(None, Some(&color), progress, space).alpha();
                assert!(alpha > last_alpha);
                last_alpha = alpha;
            }
        }
    }

    for step in 0..=10 {
        let progress = f64::from(step) / 10.0;
        assert_eq!(
            Color::transparent(),
            Color::lerp(None, None, progress, WorkingSpace::default())
        );
    }
}

#[test]
fn numbers_extrapolate() {
    let interpolation = f64::default_interpolation();
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let from: f64 = rng.gen_range(-100.0..100.0);
        let to: f64 = rng.gen_range(-100.0..100.0);
        let progress: f64 = rng.gen_range(-2.0..3.0);

        let value = lerp_possible(
            Some(from.into()),
            Some(to.into()),
            progress,
            &interpolation,
        )
        .unwrap();
        approx::assert_relative_eq!(from + (to - from) * progress, value, epsilon = 1e-9);
    }
}

#[test]
fn literal_reads_do_not_recompute() {
    let context = SignalContext::<Color>::new();
    let signal = context.create_signal("#ff0000").unwrap();
    assert_eq!(Color::red(), signal.get().unwrap());

    let mut rng = rng();
    for _ in 0..SAMPLES {
        let color = random_color(&mut rng);
        signal.set(color.clone()).unwrap();
        let version = signal.version();

        assert_eq!(color, signal.get().unwrap());
        assert_eq!(color, signal.get().unwrap());
        assert_eq!(version, signal.version());
    }
}

#[test]
fn expressions_are_evaluated_at_most_once_per_write() {
    let context = SignalContext::<Color>::new();
    let signal = context.create_neutral_signal();
    let evaluations = Rc::new(Cell::new(0));

    let mut rng = rng();
    for i in 1..=SAMPLES {
        let color = random_color(&mut rng);
        let counter = Rc::clone(&evaluations);
        let value = color.clone();
        signal.set_expression(move || {
            counter.set(counter.get() + 1);
            value.clone()
        });

        assert_eq!(color, signal.get().unwrap());
        assert_eq!(color, signal.get().unwrap());
        assert_eq!(i, evaluations.get());
    }
}

#[test]
fn context_interpolation_matches_strategy() {
    let mut rng = rng();
    for space in WorkingSpace::ALL {
        let context = SignalContext::with_interpolation(Color::create_lerp_in(space));

        for _ in 0..SAMPLES / 10 {
            let (a, b) = (random_color(&mut rng), random_color(&mut rng));
            let progress = rng.gen_range(0.0..=1.0);

            let from = context.create_signal(a.clone()).unwrap();
            let to = context.create_signal(b.clone()).unwrap();

            assert_eq!(
                Color::lerp(Some(&a), Some(&b), progress, space),
                context.interpolate(&from, &to, progress).unwrap()
            );
            assert_eq!(a, from.get().unwrap());
            assert_eq!(b, to.get().unwrap());
        }
    }
}
