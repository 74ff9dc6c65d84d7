use std::env;
use std::fmt::{self, Write as _};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use netdb_core::{
    EtherTypeRecord, ProtocolIndex, ProtocolRecord, ServiceRecord, parse_ethertypes,
    parse_protocols, parse_services,
};

const USAGE: &str =
    "usage: regenerate_builtin <protocols> <services> <ethertypes> [<output-dir>]";

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (protocols, services, ethertypes, output) = match args.as_slice() {
        [p, s, e] => (p, s, e, PathBuf::from("src").join("builtin")),
        [p, s, e, out] => (p, s, e, PathBuf::from(out)),
        _ => return Err(USAGE.to_string()),
    };

    let protocols = parse_protocols(open(Path::new(protocols))?)
        .map_err(|err| format!("failed to parse {}: {}", protocols, err))?;
    let index = ProtocolIndex::from_records(protocols.clone());
    let services = parse_services(open(Path::new(services))?, &index)
        .map_err(|err| format!("failed to parse {}: {}", services, err))?;
    let ethertypes = parse_ethertypes(open(Path::new(ethertypes))?)
        .map_err(|err| format!("failed to parse {}: {}", ethertypes, err))?;

    write_table(&output.join("protocol_table.rs"), render_protocols(&protocols))?;
    write_table(&output.join("service_table.rs"), render_services(&services))?;
    write_table(&output.join("ethertype_table.rs"), render_ethertypes(&ethertypes))?;
    Ok(())
}

fn open(path: &Path) -> Result<File, String> {
    File::open(path).map_err(|err| format!("failed to open {}: {}", path.display(), err))
}

fn write_table(path: &Path, rendered: Result<String, fmt::Error>) -> Result<(), String> {
    let source =
        rendered.map_err(|err| format!("failed to render {}: {}", path.display(), err))?;
    fs::write(path, source).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}

fn header(out: &mut String, file: &str) -> fmt::Result {
    writeln!(
        out,
        "// Generated by `regenerate_builtin` from the Debian netbase {} file.\n",
        file
    )
}

fn render_protocols(records: &[ProtocolRecord]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    header(&mut out, "protocols")?;
    writeln!(out, "pub(crate) static PROTOCOLS: &[(&str, u8, &[&str])] = &[")?;
    for p in records {
        writeln!(out, "    ({:?}, {}, {}),", p.name, p.number, aliases(&p.aliases))?;
    }
    writeln!(out, "];")?;
    Ok(out)
}

fn render_services(records: &[ServiceRecord]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    header(&mut out, "services")?;
    writeln!(out, "pub(crate) static SERVICES: &[(&str, u16, &str, &[&str])] = &[")?;
    for s in records {
        writeln!(
            out,
            "    ({:?}, {}, {:?}, {}),",
            s.name,
            s.port,
            s.protocol_name,
            aliases(&s.aliases)
        )?;
    }
    writeln!(out, "];")?;
    Ok(out)
}

fn render_ethertypes(records: &[EtherTypeRecord]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    header(&mut out, "ethertypes")?;
    writeln!(out, "pub(crate) static ETHERTYPES: &[(&str, u16, &[&str], &str)] = &[")?;
    for e in records {
        writeln!(
            out,
            "    ({:?}, 0x{:04X}, {}, {:?}),",
            e.name,
            e.number,
            aliases(&e.aliases),
            e.comment
        )?;
    }
    writeln!(out, "];")?;
    Ok(out)
}

fn aliases(aliases: &[String]) -> String {
    let quoted: Vec<String> = aliases.iter().map(|alias| format!("{:?}", alias)).collect();
    format!("&[{}]", quoted.join(", "))
}
