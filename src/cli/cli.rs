use clap::{crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, Command};

pub const FORMAT_TYPES: &[&str] = &["css", "hex", "rgb", "hsl", "lab", "lch", "oklab", "oklch"];

pub fn build_cli() -> Command {
    let color_arg_help =
        "Colors can be specified in many different formats, such as '#RRGGBB', RRGGBB, \
         '#RGB', 'rgb(…, …, …)', 'hsl(…, …, …)', or simply by the name of the color. \
         If no color argument is specified, colors will be read from standard input.";
    let color_arg_long_help = color_print::cstr!(
        "Examples (all of these specify the same color):\
         \n  - <cyan>lightslategray</>\
         \n  - <cyan>'#778899'</>\
         \n  - <cyan>778899</>\
         \n  - <cyan>789</>\
         \n  - <cyan>'rgb(119, 136, 153)'</>\
         \n  - <cyan>'rgb(119 136 153)'</>\
         \n  - <cyan>'119,136,153'</>\
         \n  - <cyan>'hsl(210, 14.3%, 53.3%)'</>\n\
         \n\
         Alpha transparency is also supported:\
         \n  - <cyan>'#77889980'</>\
         \n  - <cyan>'rgba(119, 136, 153, 0.5)'</>\
         \n  - <cyan>'hsl(210 14.3% 53.3% / 50%)'</>"
    );
    let color_arg = Arg::new("color")
        .help(color_arg_help)
        .long_help(format!(
            "{color_arg_help}\n\
             \n\
             {color_arg_long_help}"
        ))
        .value_name("COLOR")
        .action(ArgAction::Append)
        .num_args(0..)
        .trailing_var_arg(true);

    let endpoint_help = "Endpoint of the interpolation. The special value 'none' stands for a \
                         missing endpoint, which fades from or to the other endpoint.";

    let colorspace_arg = Arg::new("colorspace")
        .long("colorspace")
        .short('s')
        .value_name("NAME")
        .help(
            "Working space in which to interpolate: rgb, lrgb, hsl, lab, lch (alias hcl), \
             oklab, oklch [default: lch, or the value of TINCTURE_COLORSPACE]",
        );

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .color(clap::ColorChoice::Auto)
        .allow_negative_numbers(true)
        .dont_collapse_args_in_usage(true)
        .max_term_width(100)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("format")
                .about("Print colors in the given format")
                .long_about(color_print::cstr!(
                    "Parse the given color(s) and print them in a specific format. The default \
                     'css' format is the canonical form a color signal serializes to.\n\n\
                     <green,bold>Example:</>\
                     \n  <cyan,bold>tincture format --type oklch ff0077 teal</>"
                ))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .short('t')
                        .help("Output format type")
                        .value_parser(FORMAT_TYPES.to_vec())
                        .ignore_case(true)
                        .default_value("css")
                        .value_name("FORMAT"),
                )
                .arg(color_arg),
        )
        .subcommand(
            Command::new("mix")
                .about("Interpolate between two colors in the given working space")
                .long_about(color_print::cstr!(
                    "Interpolate between two colors at the given fraction. Fractions outside \
                     of [0, 1] extrapolate.\n\n\
                     <green,bold>Example:</>\
                     \n  <cyan,bold>tincture mix --colorspace=rgb red blue</>\
                     \n  <cyan,bold>tincture mix none red -f 0.25</>"
                ))
                .arg(colorspace_arg.clone())
                .arg(
                    Arg::new("fraction")
                        .long("fraction")
                        .short('f')
                        .help("Progress from the first to the second color")
                        .value_parser(value_parser!(f64))
                        .default_value("0.5")
                        .value_name("FRACTION"),
                )
                .arg(
                    Arg::new("from")
                        .value_name("FROM")
                        .help(endpoint_help)
                        .required(true),
                )
                .arg(
                    Arg::new("to")
                        .value_name("TO")
                        .help(endpoint_help)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("gradient")
                .about("Generate an interpolating sequence of colors")
                .long_about(color_print::cstr!(
                    "Generate a sequence of colors that interpolates between two colors. Each \
                     color is read from a color signal that is computed from a progress signal.\n\n\
                     <green,bold>Example:</>\
                     \n  <cyan,bold>tincture gradient --colorspace=oklch ffffcc fd8d3c</>\
                     \n  <cyan,bold>tincture gradient 555ee4 none -n 15</>"
                ))
                .arg(
                    Arg::new("from")
                        .value_name("FROM")
                        .help(endpoint_help)
                        .required(true),
                )
                .arg(
                    Arg::new("to")
                        .value_name("TO")
                        .help(endpoint_help)
                        .required(true),
                )
                .arg(
                    Arg::new("number")
                        .long("number")
                        .short('n')
                        .help("Number of colors to generate")
                        .value_parser(value_parser!(usize))
                        .default_value("10")
                        .value_name("COUNT"),
                )
                .arg(colorspace_arg),
        )
}

#[test]
fn verify_app() {
    build_cli().debug_assert();
}
