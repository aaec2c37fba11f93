/// Text descriptors for building meshes, e.g. `sphere(12, 16, 16)`
use std::fmt;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, multispace0, u32 as steps},
    combinator::all_consuming,
    number::complete::float,
    sequence::{delimited, preceded, terminated},
    IResult,
};

use crate::error::{Error, Result};
use crate::mesh::SurfaceMesh;
use crate::sphere::Sphere;
use crate::torus::Torus;

/// A parsed mesh description.
///
/// Grammar (whitespace allowed between tokens):
///
/// ```text
/// sphere(<radius>, <latitude_steps>, <longitude_steps>)
/// torus(<major_radius>, <minor_radius>, <major_steps>, <minor_steps>)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshDescriptor {
    Sphere {
        radius: f32,
        latitude_steps: u32,
        longitude_steps: u32,
    },
    Torus {
        major_radius: f32,
        minor_radius: f32,
        major_steps: u32,
        minor_steps: u32,
    },
}

impl MeshDescriptor {
    /// Construct the described mesh, validating its parameters
    pub fn build(&self) -> Result<Box<dyn SurfaceMesh>> {
        match *self {
            MeshDescriptor::Sphere {
                radius,
                latitude_steps,
                longitude_steps,
            } => Ok(Box::new(Sphere::new(radius, latitude_steps, longitude_steps)?)),
            MeshDescriptor::Torus {
                major_radius,
                minor_radius,
                major_steps,
                minor_steps,
            } => Ok(Box::new(Torus::new(
                major_radius,
                minor_radius,
                major_steps,
                minor_steps,
            )?)),
        }
    }
}

impl FromStr for MeshDescriptor {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match all_consuming(terminated(parse_descriptor, multispace0))(input) {
            Ok((_, descriptor)) => Ok(descriptor),
            Err(e) => Err(Error::Parse(format!(
                "invalid mesh descriptor {input:?}: {e:?}"
            ))),
        }
    }
}

impl fmt::Display for MeshDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshDescriptor::Sphere {
                radius,
                latitude_steps,
                longitude_steps,
            } => write!(f, "sphere({radius}, {latitude_steps}, {longitude_steps})"),
            MeshDescriptor::Torus {
                major_radius,
                minor_radius,
                major_steps,
                minor_steps,
            } => write!(
                f,
                "torus({major_radius}, {minor_radius}, {major_steps}, {minor_steps})"
            ),
        }
    }
}

fn parse_descriptor(input: &str) -> IResult<&str, MeshDescriptor> {
    alt((parse_sphere, parse_torus))(input)
}

fn parse_sphere(input: &str) -> IResult<&str, MeshDescriptor> {
    let (input, _) = open(input, "sphere")?;
    let (input, radius) = preceded(multispace0, float)(input)?;
    let (input, latitude_steps) = preceded(separator, steps)(input)?;
    let (input, longitude_steps) = preceded(separator, steps)(input)?;
    let (input, _) = close(input)?;

    Ok((
        input,
        MeshDescriptor::Sphere {
            radius,
            latitude_steps,
            longitude_steps,
        },
    ))
}

fn parse_torus(input: &str) -> IResult<&str, MeshDescriptor> {
    let (input, _) = open(input, "torus")?;
    let (input, major_radius) = preceded(multispace0, float)(input)?;
    let (input, minor_radius) = preceded(separator, float)(input)?;
    let (input, major_steps) = preceded(separator, steps)(input)?;
    let (input, minor_steps) = preceded(separator, steps)(input)?;
    let (input, _) = close(input)?;

    Ok((
        input,
        MeshDescriptor::Torus {
            major_radius,
            minor_radius,
            major_steps,
            minor_steps,
        },
    ))
}

fn open<'a>(input: &'a str, keyword: &'static str) -> IResult<&'a str, char> {
    let (input, _) = preceded(multispace0, tag(keyword))(input)?;
    preceded(multispace0, char('('))(input)
}

fn close(input: &str) -> IResult<&str, char> {
    preceded(multispace0, char(')'))(input)
}

fn separator(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}
