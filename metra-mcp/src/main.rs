//! Metra MCP Server
//!
//! MCP Server over stdio, protocol revision 2025-11-25
//!
//! Tools:
//! - convert: Convert a value between two units of a category
//! - convert_batch: Several conversions in one call
//! - list_categories: List available categories
//! - list_units: List the units of one category

mod config;

use config::{init_logging, ServerConfig};
use metra_core::{ConversionRequest, MetraError};
use metra_core::format::format_plain;
use metra_plugin::CategoryRegistry;
use std::io::{self, BufRead, Write};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const PARSE_ERROR: i32 = -32700;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    // Always present: a parse error answers with `"id": null`
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn invalid_params(details: impl Into<String>) -> Self {
        let details = details.into();
        McpError {
            code: INVALID_PARAMS,
            data: serde_json::to_value(MetraError::invalid_params(details.as_str())).ok(),
            message: details,
        }
    }

    fn internal(details: impl Into<String>) -> Self {
        let details = details.into();
        McpError {
            code: INTERNAL_ERROR,
            data: serde_json::to_value(MetraError::internal(details.as_str())).ok(),
            message: details,
        }
    }
}

fn main() {
    let config = ServerConfig::from_env();
    init_logging(&config);

    let registry = metra_units::standard_registry();

    info!(
        version = SERVER_VERSION,
        protocol = PROTOCOL_VERSION,
        categories = registry.len(),
        "Metra MCP Server started"
    );

    let stdin = io::stdin();
    let reader = io::BufReader::new(stdin.lock());

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Error reading input: {}", e);
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!(bytes = line.len(), "Received request");

        let request = match parse_request(line) {
            Ok(r) => r,
            Err(response) => {
                if write_response(&response).is_err() {
                    break;
                }
                continue;
            }
        };

        let response = handle_request(&registry, &config, &request);

        // Notifications (no id) should NOT receive a response
        if request.id.is_none() {
            debug!(method = %request.method, "Notification processed");
            continue;
        }

        if write_response(&response).is_err() {
            break;
        }

        debug!(method = %request.method, "Sent response");
    }

    info!("Server shutting down");
}

fn parse_request(line: &str) -> Result<McpRequest, McpResponse> {
    serde_json::from_str(line).map_err(|e| {
        warn!("Error parsing request: {}", e);
        error_response(None, McpError {
            code: PARSE_ERROR,
            message: format!("Parse error: {}", e),
            data: None,
        })
    })
}

fn write_response(response: &McpResponse) -> io::Result<()> {
    let response_json = match serde_json::to_string(response) {
        Ok(json) => json,
        Err(e) => {
            error!("Error serializing response: {}", e);
            return Ok(());
        }
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", response_json)
        .and_then(|_| stdout.flush())
        .inspect_err(|e| error!("Error writing response: {}", e))
}

fn error_response(id: Option<JsonValue>, error: McpError) -> McpResponse {
    McpResponse {
        jsonrpc: "2.0".to_string(),
        id,
        result: None,
        error: Some(error),
    }
}

fn handle_request(registry: &CategoryRegistry, config: &ServerConfig, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(config, &request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(registry, &request.params),

        _ => Err(McpError {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: Some(r),
            error: None,
        },
        Err(e) => error_response(request.id.clone(), e),
    }
}

fn handle_initialize(config: &ServerConfig, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "Client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": config.server_name,
            "version": SERVER_VERSION,
            "description": "Unit conversion with explained arithmetic"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Metra converts values between units of one category (Length, Temperature, Currency, ...). Call list_categories() and list_units(category) to discover exact unit names, then convert(). Each result carries the formula showing how it was computed. Currency rates are fixed and not live."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    let conversion_properties = json!({
        "category": {
            "type": "string",
            "description": "Category name, e.g. 'Length' or 'Fuel Economy' (case-insensitive)"
        },
        "value": {
            "type": "number",
            "description": "Value to convert"
        },
        "from_unit": {
            "type": "string",
            "description": "Source unit, exactly as listed by list_units"
        },
        "to_unit": {
            "type": "string",
            "description": "Target unit, exactly as listed by list_units"
        }
    });

    Ok(json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a value from one unit to another within a category. Returns the numeric result and the formula used.",
                "inputSchema": {
                    "type": "object",
                    "properties": conversion_properties,
                    "required": ["category", "value", "from_unit", "to_unit"]
                }
            },
            {
                "name": "convert_batch",
                "description": "Run several conversions at once. A failing conversion is reported in its slot and does not fail the batch.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "requests": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": conversion_properties,
                                "required": ["category", "value", "from_unit", "to_unit"]
                            }
                        }
                    },
                    "required": ["requests"]
                }
            },
            {
                "name": "list_categories",
                "description": "List conversion categories in display order, with their algorithm family, base unit and units.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "list_units",
                "description": "List the units of a category in display order, plus the default from/to pair.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category name"
                        }
                    },
                    "required": ["category"]
                }
            }
        ]
    }))
}

fn handle_tool_call(registry: &CategoryRegistry, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref()
        .ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    debug!(tool = name, "Tool call");

    match name {
        "convert" => tool_convert(registry, args),
        "convert_batch" => tool_convert_batch(registry, args),
        "list_categories" => tool_list_categories(registry),
        "list_units" => tool_list_units(registry, args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn tool_convert(registry: &CategoryRegistry, args: JsonValue) -> Result<JsonValue, McpError> {
    let request = parse_conversion_request(&args)?;

    match registry.convert_request(&request) {
        Ok(conversion) => {
            let formula = conversion.formula_text();
            Ok(json!({
                "content": [{ "type": "text", "text": formula }],
                "result": number_to_json(conversion.value),
                "formula": formula,
                "isError": false
            }))
        }
        Err(e) => Ok(error_result(e.into())),
    }
}

fn tool_convert_batch(registry: &CategoryRegistry, args: JsonValue) -> Result<JsonValue, McpError> {
    let requests = args.get("requests")
        .and_then(|v| v.as_array())
        .ok_or_else(|| McpError::invalid_params("Missing requests"))?;

    let mut results = Vec::with_capacity(requests.len());
    let mut lines = Vec::with_capacity(requests.len());
    let mut failed = 0;

    for (i, item) in requests.iter().enumerate() {
        let outcome = parse_conversion_request(item)
            .map_err(|e| MetraError::invalid_params(e.message))
            .and_then(|request| registry.convert_request(&request).map_err(MetraError::from));

        match outcome {
            Ok(conversion) => {
                let formula = conversion.formula_text();
                results.push(json!({
                    "index": i,
                    "result": number_to_json(conversion.value),
                    "formula": formula
                }));
                lines.push(formula);
            }
            Err(e) => {
                failed += 1;
                lines.push(e.to_string());
                results.push(json!({
                    "index": i,
                    "error": e
                }));
            }
        }
    }

    Ok(json!({
        "content": [{ "type": "text", "text": lines.join("\n") }],
        "results": results,
        "failed": failed,
        "isError": false
    }))
}

fn tool_list_categories(registry: &CategoryRegistry) -> Result<JsonValue, McpError> {
    let catalog = registry.catalog();
    let names: Vec<&str> = catalog.iter().map(|c| c.name).collect();

    let categories = serde_json::to_value(&catalog)
        .map_err(|e| McpError::internal(format!("Failed to serialize catalog: {}", e)))?;

    Ok(json!({
        "content": [{ "type": "text", "text": names.join("\n") }],
        "categories": categories,
        "count": catalog.len()
    }))
}

fn tool_list_units(registry: &CategoryRegistry, args: JsonValue) -> Result<JsonValue, McpError> {
    let category = required_str(&args, "category")?;

    let listing = registry.units_for(category)
        .and_then(|units| registry.default_units(category).map(|defaults| (units, defaults)));

    match listing {
        Ok((units, (from, to))) => Ok(json!({
            "content": [{ "type": "text", "text": units.join("\n") }],
            "category": category,
            "units": units,
            "default": { "from_unit": from, "to_unit": to }
        })),
        Err(e) => Ok(error_result(e.into())),
    }
}

/// Tool-level failure: reported as a result so the client can show it
fn error_result(error: MetraError) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": error.to_string() }],
        "error": error,
        "isError": true
    })
}

fn parse_conversion_request(args: &JsonValue) -> Result<ConversionRequest, McpError> {
    Ok(ConversionRequest::new(
        required_str(args, "category")?,
        required_number(args, "value")?,
        required_str(args, "from_unit")?,
        required_str(args, "to_unit")?,
    ))
}

fn required_str<'a>(args: &'a JsonValue, key: &str) -> Result<&'a str, McpError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", key)))
}

/// Numbers arrive as JSON numbers or numeric strings ("1e3", "inf", "nan")
fn required_number(args: &JsonValue, key: &str) -> Result<f64, McpError> {
    match args.get(key) {
        Some(JsonValue::Number(n)) => n.as_f64()
            .ok_or_else(|| McpError::invalid_params(format!("{} is out of range", key))),
        Some(JsonValue::String(s)) => s.trim().parse::<f64>()
            .map_err(|_| McpError::invalid_params(format!("{} is not a number: '{}'", key, s))),
        Some(_) => Err(McpError::invalid_params(format!("{} must be a number", key))),
        None => Err(McpError::invalid_params(format!("Missing {} argument", key))),
    }
}

/// JSON has no infinity or NaN; those travel as "inf", "-inf" and "nan"
fn number_to_json(value: f64) -> JsonValue {
    serde_json::Number::from_f64(value)
        .map(JsonValue::Number)
        .unwrap_or_else(|| JsonValue::String(format_plain(value)))
}
