pub trait Glsl {
    const NAME: &'static str;
}

pub struct GlslParam {
    pub name: &'static str,
    pub ty: &'static str,
    pub inout: bool,
}

impl GlslParam {
    pub const fn new<T: Glsl>(name: &'static str) -> Self {
        Self { name, ty: T::NAME, inout: false }
    }

    pub const fn inout<T: Glsl>(name: &'static str) -> Self {
        Self { name, ty: T::NAME, inout: true }
    }

    fn glsl_declaration(&self) -> String {
        let mut decl = String::new();
        if self.inout {
            decl.push_str("inout ");
        }
        decl.push_str(self.ty);
        decl.push(' ');
        decl.push_str(self.name);
        decl
    }
}

/// A free GLSL function, assembled line by line.
pub struct GlslFunction {
    pub name: &'static str,
    pub ret: &'static str,
    pub comment: Option<&'static str>,
    pub params: Vec<GlslParam>,
    pub body: Vec<String>,
}

impl GlslFunction {
    pub const fn new<R: Glsl>(name: &'static str) -> Self {
        Self { name, ret: R::NAME, comment: None, params: Vec::new(), body: Vec::new() }
    }

    #[must_use]
    pub fn comment(mut self, comment: &'static str) -> Self {
        self.comment = Some(comment);
        self
    }

    #[must_use]
    pub fn param(mut self, param: GlslParam) -> Self {
        self.params.push(param);
        self
    }

    #[must_use]
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn glsl_function_definition(&self) -> String {
        let mut def = String::new();
        if let Some(comment) = self.comment {
            for line in comment.lines() {
                def.push_str("// ");
                def.push_str(line);
                def.push('\n');
            }
        }
        def.push_str(self.ret);
        def.push(' ');
        def.push_str(self.name);
        def.push('(');
        let params = self.params.iter().map(GlslParam::glsl_declaration).collect::<Vec<_>>();
        def.push_str(&params.join(", "));
        def.push_str(")\n{\n");
        for line in &self.body {
            def.push_str("  ");
            def.push_str(line);
            def.push('\n');
        }
        def.push_str("}\n");
        def
    }
}

/// An unsigned literal, e.g. `747796405u`.
pub fn uint_literal(value: u32) -> String {
    format!("{value}u")
}

/// A hex unsigned literal, e.g. `0x2f800004u`.
pub fn uint_hex_literal(value: u32) -> String {
    format!("{value:#x}u")
}

macro_rules! impl_glsl {
    ($type:ty => $name:expr) => {
        impl Glsl for $type {
            const NAME: &'static str = $name;
        }
    };
}

impl_glsl!(() => "void");
impl_glsl!(bool => "bool");
impl_glsl!(f32 => "float");
impl_glsl!(f64 => "double");
impl_glsl!(i32 => "int");
impl_glsl!(u32 => "uint");
impl_glsl!(i64 => "int64_t");
impl_glsl!(u64 => "uint64_t");
