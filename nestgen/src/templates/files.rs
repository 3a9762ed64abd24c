//! Template file contents

/// NestJS module wiring one controller and one service
pub const MODULE_TS: &str = r"import { Module } from '@nestjs/common';
import { {{class_name}}Controller } from './{{module_name}}.controller';
import { {{class_name}}Service } from './{{module_name}}.service';

@Module({
  controllers: [{{class_name}}Controller],
  providers: [{{class_name}}Service],
  exports: [{{class_name}}Service],
})
export class {{class_name}}Module {}
";

/// Supabase-backed service with the five CRUD queries
pub const SERVICE_TS: &str = r"import { Injectable } from '@nestjs/common';
import { createClient } from '@supabase/supabase-js';

@Injectable()
export class {{class_name}}Service {
  private supabase;

  constructor() {
    this.supabase = createClient(
      process.env.SUPABASE_URL,
      process.env.SUPABASE_SERVICE_ROLE_KEY,
    );
  }

  async findAll(companyId: string, filters?: any) {
    let query = this.supabase
      .from('{{table_plural}}')
      .select('*')
      .eq('company_id', companyId);

    const { data, error } = await query.order('created_at', { ascending: false });
    if (error) throw error;
    return data;
  }

  async findOne(id: string) {
    const { data, error } = await this.supabase
      .from('{{table_plural}}')
      .select('*')
      .eq('id', id)
      .single();
    if (error) throw error;
    return data;
  }

  async create(createData: any) {
    const { data, error } = await this.supabase
      .from('{{table_plural}}')
      .insert(createData)
      .select()
      .single();
    if (error) throw error;
    return data;
  }

  async update(id: string, updateData: any) {
    const { data, error } = await this.supabase
      .from('{{table_plural}}')
      .update(updateData)
      .eq('id', id)
      .select()
      .single();
    if (error) throw error;
    return data;
  }

  async delete(id: string) {
    const { error } = await this.supabase.from('{{table_plural}}').delete().eq('id', id);
    if (error) throw error;
    return { message: '{{class_name}} deleted successfully' };
  }
}
";

/// JWT-guarded controller exposing the five CRUD endpoints
pub const CONTROLLER_TS: &str = r"import { Controller, Get, Post, Put, Delete, Param, Body, UseGuards, Query } from '@nestjs/common';
import { AuthGuard } from '@nestjs/passport';
import { ApiTags, ApiOperation, ApiBearerAuth } from '@nestjs/swagger';
import { {{class_name}}Service } from './{{module_name}}.service';
import { CurrentUser } from '../common/decorators/current-user.decorator';

@ApiTags('{{class_name}}')
@Controller('{{module_name}}')
@UseGuards(AuthGuard('jwt'))
@ApiBearerAuth()
export class {{class_name}}Controller {
  constructor(private {{property_name}}Service: {{class_name}}Service) {}

  @Get()
  @ApiOperation({ summary: 'Get all {{module_name}}' })
  async findAll(@CurrentUser() user: any, @Query() filters: any) {
    return this.{{property_name}}Service.findAll(user.companyId, filters);
  }

  @Get(':id')
  @ApiOperation({ summary: 'Get {{module_name}} by ID' })
  async findOne(@Param('id') id: string) {
    return this.{{property_name}}Service.findOne(id);
  }

  @Post()
  @ApiOperation({ summary: 'Create {{module_name}}' })
  async create(@CurrentUser() user: any, @Body() createData: any) {
    return this.{{property_name}}Service.create({ ...createData, company_id: user.companyId });
  }

  @Put(':id')
  @ApiOperation({ summary: 'Update {{module_name}}' })
  async update(@Param('id') id: string, @Body() updateData: any) {
    return this.{{property_name}}Service.update(id, updateData);
  }

  @Delete(':id')
  @ApiOperation({ summary: 'Delete {{module_name}}' })
  async delete(@Param('id') id: string) {
    return this.{{property_name}}Service.delete(id);
  }
}
";
