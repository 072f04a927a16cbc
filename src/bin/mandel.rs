extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num;

use clap::{App, Arg, ArgMatches};
use mandelbrot::{Config, MandelError, Pixel, Region, Viewer};
use num::Complex;
use std::path::PathBuf;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    let (re, im) = parse_pair(s, ',')?;
    Some(Complex { re, im })
}

/// A drag from one pixel to another, written `x0,y0:x1,y1`.
fn parse_selection(s: &str) -> Option<(Pixel, Pixel)> {
    let index = s.find(':')?;
    let from = parse_pair::<usize>(&s[..index], ',')?;
    let to = parse_pair::<usize>(&s[index + 1..], ',')?;
    Some((Pixel(from.0, from.1), Pixel(to.0, to.1)))
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const CAPTURES: &str = "captures";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const ZOOM: &str = "zoom";

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandel")
        .version("0.1.0")
        .about("Mandelbrot renderer")
        .arg(
            Arg::with_name(CAPTURES)
                .required(false)
                .long(CAPTURES)
                .short("o")
                .takes_value(true)
                .default_value(mandelbrot::config::DEFAULT_CAPTURES)
                .help("Directory captures are written to"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1280x720")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2,-1")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the region"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1,1")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the region"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1024,
                        "Could not parse thread count",
                        "Thread count must be between 1 and 1024",
                    )
                })
                .help("Number of worker threads per frame (default: one per CPU)"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("160")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iteration cap per point"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .required(false)
                .long(ZOOM)
                .short("z")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(|s| match parse_selection(&s) {
                    Some(_) => Ok(()),
                    None => Err("Zoom selections look like x0,y0:x1,y1".to_string()),
                })
                .help("Drag selection on the previous frame; repeat to zoom further"),
        )
        .get_matches()
}

fn config_from(matches: &ArgMatches) -> Result<Config, MandelError> {
    // The validators already vetted every value, so the parses below
    // only fall back to defaults if clap and we disagree.
    let defaults = Config::default();
    let size = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<usize>(s, 'x'))
        .unwrap_or(defaults.size);
    let leftlower = matches
        .value_of(LEFTLOWER)
        .and_then(parse_complex)
        .unwrap_or_else(|| Complex::new(defaults.region.x_min(), defaults.region.y_min()));
    let rightupper = matches
        .value_of(RIGHTUPPER)
        .and_then(parse_complex)
        .unwrap_or_else(|| Complex::new(defaults.region.x_max(), defaults.region.y_max()));
    let workers = matches
        .value_of(THREADS)
        .and_then(|s| usize::from_str(s).ok())
        .unwrap_or(defaults.workers);
    let max_iterations = matches
        .value_of(ITERATIONS)
        .and_then(|s| u32::from_str(s).ok())
        .unwrap_or(defaults.max_iterations);
    let captures = matches
        .value_of(CAPTURES)
        .map(PathBuf::from)
        .unwrap_or(defaults.captures);

    Ok(Config {
        size,
        max_iterations,
        workers,
        region: Region::new(leftlower.re, rightupper.re, leftlower.im, rightupper.im)?,
        captures,
    })
}

fn run(matches: &ArgMatches) -> Result<(), MandelError> {
    let config = config_from(matches)?;
    info!("Starting at {:?}", config);

    let viewer = Viewer::new(config.request()?)?;
    println!("{}", viewer.frame().capture(&config.captures)?.display());

    if let Some(selections) = matches.values_of(ZOOM) {
        for (from, to) in selections.filter_map(parse_selection) {
            let frame = viewer.zoom(from, to)?;
            println!("{}", frame.capture(&config.captures)?.display());
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
