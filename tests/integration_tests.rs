use assert_cmd::Command;

fn tincture() -> Command {
    let mut cmd = Command::cargo_bin("tincture").unwrap();
    cmd.env_remove("TINCTURE_COLORSPACE");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn format_prints_canonical_form() {
    tincture()
        .arg("format")
        .arg("red")
        .assert()
        .success()
        .stdout("rgb(255,0,0)\n");

    tincture()
        .arg("format")
        .arg("#ff000080")
        .arg("hsl(240, 100%, 50%)")
        .assert()
        .success()
        .stdout("rgba(255,0,0,0.502)\nrgb(0,0,255)\n");
}

#[test]
fn format_types() {
    tincture()
        .arg("format")
        .arg("--type")
        .arg("hex")
        .arg("red")
        .assert()
        .success()
        .stdout("#ff0000\n");

    tincture()
        .arg("format")
        .arg("-t")
        .arg("rgb")
        .arg("red")
        .arg("blue")
        .assert()
        .success()
        .stdout("rgb(255, 0, 0)\nrgb(0, 0, 255)\n");

    tincture()
        .arg("format")
        .arg("--type")
        .arg("oklab")
        .arg("red")
        .assert()
        .success()
        .stdout("oklab(0.628 0.225 0.126)\n");
}

#[test]
fn format_reads_colors_from_stdin() {
    tincture()
        .arg("format")
        .write_stdin("red\n\n#0000ff\n")
        .assert()
        .success()
        .stdout("rgb(255,0,0)\nrgb(0,0,255)\n");

    tincture()
        .arg("format")
        .write_stdin("no color")
        .assert()
        .failure();
}

#[test]
fn format_rejects_invalid_color() {
    tincture()
        .arg("format")
        .arg("no color")
        .assert()
        .failure()
        .stderr("[tincture error]: Could not parse color 'no color'\n");
}

#[test]
fn mix_basic() {
    tincture()
        .arg("mix")
        .arg("--colorspace=rgb")
        .arg("red")
        .arg("blue")
        .assert()
        .success()
        .stdout("rgb(128,0,128)\n");

    tincture()
        .arg("mix")
        .arg("-s")
        .arg("rgb")
        .arg("-f")
        .arg("0")
        .arg("red")
        .arg("blue")
        .assert()
        .success()
        .stdout("rgb(255,0,0)\n");
}

#[test]
fn mix_with_missing_endpoint_fades() {
    tincture()
        .arg("mix")
        .arg("none")
        .arg("red")
        .arg("-f")
        .arg("0.5")
        .arg("-s")
        .arg("rgb")
        .assert()
        .success()
        .stdout("rgba(255,0,0,0.5)\n");

    tincture()
        .arg("mix")
        .arg("none")
        .arg("none")
        .assert()
        .success()
        .stdout("rgba(0,0,0,0)\n");
}

#[test]
fn mix_rejects_unknown_colorspace() {
    tincture()
        .arg("mix")
        .arg("-s")
        .arg("cmyk")
        .arg("red")
        .arg("blue")
        .assert()
        .failure();
}

#[test]
fn colorspace_from_environment() {
    tincture()
        .env("TINCTURE_COLORSPACE", "rgb")
        .arg("mix")
        .arg("red")
        .arg("blue")
        .assert()
        .success()
        .stdout("rgb(128,0,128)\n");

    tincture()
        .env("TINCTURE_COLORSPACE", "nonsense")
        .arg("mix")
        .arg("red")
        .arg("blue")
        .assert()
        .failure();
}

#[test]
fn gradient_basic() {
    tincture()
        .arg("gradient")
        .arg("red")
        .arg("blue")
        .arg("-n")
        .arg("3")
        .arg("-s")
        .arg("rgb")
        .assert()
        .success()
        .stdout("rgb(255,0,0)\nrgb(128,0,128)\nrgb(0,0,255)\n");
}

#[test]
fn gradient_to_missing_endpoint() {
    tincture()
        .arg("gradient")
        .arg("white")
        .arg("none")
        .arg("-n")
        .arg("3")
        .assert()
        .success()
        .stdout("rgb(255,255,255)\nrgba(255,255,255,0.5)\nrgba(255,255,255,0)\n");
}

#[test]
fn gradient_needs_two_colors() {
    tincture()
        .arg("gradient")
        .arg("red")
        .arg("blue")
        .arg("-n")
        .arg("1")
        .assert()
        .failure();
}
