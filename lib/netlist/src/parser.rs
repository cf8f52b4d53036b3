use crate::{BjtPolarity, Device, DeviceKind, MosPolarity, NetlistParseError, Subcircuit};

/// A logical netlist card: one line plus its `+` continuations.
#[derive(Debug)]
struct Card {
    line: usize,
    tokens: Vec<String>,
}

/// The cards of one `.SUBCKT` definition, or of the text outside any definition.
#[derive(Debug)]
struct Definition {
    name: String,
    ports: Vec<String>,
    cards: Vec<Card>,
}

/// Parses the subcircuit `name` from a SPICE netlist.
///
/// If the text holds several `.SUBCKT` definitions, the one whose name matches `name` is used,
/// otherwise the first one. Text without any `.SUBCKT` card is read as the body of a subcircuit
/// called `name` that has no ports.
pub fn parse_subcircuit(name: &str, text: &str) -> Result<Subcircuit, NetlistParseError> {
    let (definitions, top_level) = split_definitions(read_cards(text)?)?;

    let definition = if definitions.is_empty() {
        Definition {
            name: name.to_owned(),
            ports: Vec::new(),
            cards: top_level,
        }
    } else {
        let position = definitions
            .iter()
            .position(|d| d.name.eq_ignore_ascii_case(name))
            .unwrap_or(0);
        definitions.into_iter().nth(position).unwrap_or_else(|| Definition {
            name: name.to_owned(),
            ports: Vec::new(),
            cards: Vec::new(),
        })
    };

    let mut subcircuit = Subcircuit::new(
        definition.name,
        definition.ports.iter().map(|p| p.to_lowercase()).collect(),
    );
    for card in &definition.cards {
        if let Some(device) = parse_device(card)? {
            subcircuit.devices.push(device);
        }
    }
    Ok(subcircuit)
}

/// Returns the name of the first `.SUBCKT` card in `text`, as written.
pub fn find_subcircuit_name(text: &str) -> Option<String> {
    text.lines().find_map(|line| {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next()?;
        if keyword.eq_ignore_ascii_case(".subckt") {
            tokens.next().map(str::to_owned)
        } else {
            None
        }
    })
}

fn read_cards(text: &str) -> Result<Vec<Card>, NetlistParseError> {
    let mut cards: Vec<Card> = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = strip_inline_comment(raw).trim();
        if content.is_empty() || content.starts_with('*') {
            continue;
        }

        if let Some(continuation) = content.strip_prefix('+') {
            let Some(card) = cards.last_mut() else {
                return Err(NetlistParseError::DanglingContinuation { line });
            };
            card.tokens.extend(tokenize(continuation));
            card.tokens = merge_assignments(std::mem::take(&mut card.tokens));
        } else {
            let tokens = merge_assignments(tokenize(content));
            if !tokens.is_empty() {
                cards.push(Card { line, tokens });
            }
        }
    }
    Ok(cards)
}

fn strip_inline_comment(line: &str) -> &str {
    match line.find([';', '$']) {
        Some(position) => &line[..position],
        None => line,
    }
}

fn tokenize(content: &str) -> Vec<String> {
    content
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')' || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Joins `w = 1u` and similar spellings into a single `w=1u` token.
fn merge_assignments(tokens: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(tokens.len());
    let mut pending_value = false;
    for token in tokens {
        if pending_value {
            if let Some(last) = result.last_mut() {
                last.push_str(&token);
                pending_value = token.ends_with('=');
                continue;
            }
        }
        if token.starts_with('=') {
            if let Some(last) = result.last_mut() {
                last.push_str(&token);
                pending_value = token.ends_with('=');
                continue;
            }
        }
        pending_value = token.ends_with('=');
        result.push(token);
    }
    result
}

fn split_definitions(cards: Vec<Card>) -> Result<(Vec<Definition>, Vec<Card>), NetlistParseError> {
    let mut definitions = Vec::new();
    let mut top_level = Vec::new();
    let mut current: Option<Definition> = None;

    for card in cards {
        let keyword = card.tokens[0].to_lowercase();
        match keyword.as_str() {
            ".subckt" => {
                let Some(name) = card.tokens.get(1) else {
                    return Err(NetlistParseError::UnnamedSubcircuit { line: card.line });
                };
                let ports = card.tokens[2..]
                    .iter()
                    .take_while(|t| !t.eq_ignore_ascii_case("params:"))
                    .filter(|t| !is_parameter(t))
                    .cloned()
                    .collect();
                if let Some(open) = current.replace(Definition {
                    name: name.clone(),
                    ports,
                    cards: Vec::new(),
                }) {
                    definitions.push(open);
                }
            }
            ".ends" => {
                if let Some(open) = current.take() {
                    definitions.push(open);
                }
            }
            _ => match &mut current {
                Some(definition) => definition.cards.push(card),
                None => top_level.push(card),
            },
        }
    }
    if let Some(open) = current {
        definitions.push(open);
    }
    Ok((definitions, top_level))
}

fn is_parameter(token: &str) -> bool {
    token.contains('=')
}

fn is_number(token: &str) -> bool {
    let digits = token.trim_start_matches(['+', '-']);
    let digits = digits.strip_prefix('.').unwrap_or(digits);
    digits.starts_with(|c: char| c.is_ascii_digit())
}

fn parse_device(card: &Card) -> Result<Option<Device>, NetlistParseError> {
    let name = card.tokens[0].to_lowercase();
    if name.starts_with('.') {
        return Ok(None);
    }
    let positional: Vec<String> = card.tokens[1..]
        .iter()
        .take_while(|t| !t.eq_ignore_ascii_case("params:"))
        .filter(|t| !is_parameter(t))
        .map(|t| t.to_lowercase())
        .collect();

    let line = card.line;
    let missing_nets = |expected: usize| NetlistParseError::MissingNets {
        line,
        name: name.clone(),
        expected,
        found: positional.len(),
    };
    let missing_model = || NetlistParseError::MissingModel {
        line,
        name: name.clone(),
    };

    let (kind, nets, model) = match name.chars().next() {
        Some('m') => {
            if positional.len() < 4 {
                return Err(missing_nets(4));
            }
            let model = positional.get(4).ok_or_else(missing_model)?;
            let polarity = mos_polarity(model).ok_or_else(|| NetlistParseError::UnknownPolarity {
                line,
                model: model.clone(),
            })?;
            (
                DeviceKind::Mosfet(polarity),
                positional[..4].to_vec(),
                Some(model.clone()),
            )
        }
        Some('q') => {
            // A trailing area factor follows the model.
            let mut positional = positional.as_slice();
            while positional.len() > 4 {
                match positional.split_last() {
                    Some((last, rest)) if is_number(last) => positional = rest,
                    _ => break,
                }
            }
            let net_count = match positional.len() {
                0..=2 => return Err(missing_nets(3)),
                3 => return Err(missing_model()),
                4 => 3,
                _ => 4,
            };
            let model = &positional[net_count];
            (
                DeviceKind::Bjt(bjt_polarity(model)),
                positional[..net_count].to_vec(),
                Some(model.clone()),
            )
        }
        Some('d') => {
            if positional.len() < 2 {
                return Err(missing_nets(2));
            }
            let model = positional.get(2).ok_or_else(missing_model)?;
            (DeviceKind::Diode, positional[..2].to_vec(), Some(model.clone()))
        }
        Some(letter @ ('r' | 'c' | 'l' | 'v' | 'i')) => {
            if positional.len() < 2 {
                return Err(missing_nets(2));
            }
            let kind = match letter {
                'r' => DeviceKind::Resistor,
                'c' => DeviceKind::Capacitor,
                'l' => DeviceKind::Inductor,
                'v' => DeviceKind::VoltageSource,
                _ => DeviceKind::CurrentSource,
            };
            (kind, positional[..2].to_vec(), None)
        }
        Some('x') => {
            let Some((subcircuit, nets)) = positional.split_last() else {
                return Err(missing_nets(1));
            };
            if nets.is_empty() {
                return Err(NetlistParseError::MissingNets {
                    line,
                    name: name.clone(),
                    expected: 1,
                    found: 0,
                });
            }
            (
                DeviceKind::Instance(subcircuit.clone()),
                nets.to_vec(),
                Some(subcircuit.clone()),
            )
        }
        _ => return Err(NetlistParseError::UnknownDevice { line, name }),
    };

    Ok(Some(Device {
        name,
        kind,
        nets,
        model,
    }))
}

fn mos_polarity(model: &str) -> Option<MosPolarity> {
    let model = model.to_lowercase();
    if ["pmos", "pfet", "pch"].iter().any(|p| model.contains(p)) {
        return Some(MosPolarity::Pmos);
    }
    if ["nmos", "nfet", "nch"].iter().any(|p| model.contains(p)) {
        return Some(MosPolarity::Nmos);
    }
    match model.chars().next() {
        Some('p') => Some(MosPolarity::Pmos),
        Some('n') => Some(MosPolarity::Nmos),
        _ => None,
    }
}

fn bjt_polarity(model: &str) -> BjtPolarity {
    if model.to_lowercase().contains("pnp") {
        BjtPolarity::Pnp
    } else {
        BjtPolarity::Npn
    }
}
